//! Prompt lifecycle capability
//!
//! The selection controller reports value changes and terminal transitions
//! through this trait instead of owning any terminal or process I/O.

use serde_json::Value;

/// Terminal state of a prompt session
///
/// `Active` is the only non-terminal state; once left it is never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Active,
    Done,
    Aborted,
    Exited,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Active
    }
}

/// Notifications emitted by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum PromptEvent {
    /// A movement committed a new selection
    ValueChanged(Value),
    /// The prompt finished with this value
    Submit(Value),
    Abort(Value),
    Exit(Value),
}

impl PromptEvent {
    pub fn value(&self) -> &Value {
        match self {
            PromptEvent::ValueChanged(v)
            | PromptEvent::Submit(v)
            | PromptEvent::Abort(v)
            | PromptEvent::Exit(v) => v,
        }
    }
}

pub trait Lifecycle {
    /// Deliver an event to whoever drives the prompt
    fn fire(&mut self, event: PromptEvent);

    /// End the session; called once after a terminal transition
    fn close(&mut self);

    /// Non-mutating feedback for a rejected movement or submit
    fn bell(&mut self);
}
