//! Interactive autocomplete prompt
//!
//! Choices are filtered by an async [`suggest::Matcher`] as the user types.
//! Only the most recent matcher request may update the list, movement skips
//! disabled choices, and rendering is a pure function of prompt state.

pub mod app;
pub mod candidate;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod selection;
pub mod suggest;
pub mod theme;
pub mod viewport;


pub use candidate::{Candidate, RawChoice};
pub use error::AutopromptError;
pub use prompt::{AutocompletePrompt, PromptOptions};
