//! Terminal front end for the prompt

mod event_loop;
mod session;

pub use event_loop::{PromptTerminal, init_terminal, restore_terminal, run, used_rows, viewport_height};
pub use session::{Outcome, SessionLifecycle};
