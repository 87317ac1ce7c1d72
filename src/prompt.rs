//! Autocomplete prompt
//!
//! Wires the input editor, the suggestion engine, the selection controller
//! and the viewport into one state machine driven by key presses and
//! matcher resolutions.

mod input_state;
mod keys;
mod options;
mod prompt_state;

pub use input_state::InputState;
pub use keys::{PromptAction, action_for};
pub use options::{Initial, PromptOptions};
pub use prompt_state::AutocompletePrompt;
