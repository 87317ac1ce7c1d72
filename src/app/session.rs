use serde_json::Value;

use crate::candidate::display_value;
use crate::selection::{Lifecycle, PromptEvent};

/// How a prompt session ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Submitted(Value),
    Exited(Value),
    Aborted(Value),
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Submitted(_) => 0,
            Outcome::Exited(_) => 1,
            Outcome::Aborted(_) => 130,
        }
    }

    /// Text printed to stdout, only for a submitted value
    ///
    /// Strings are printed raw, everything else as JSON.
    pub fn output(&self) -> Option<String> {
        match self {
            Outcome::Submitted(value) => Some(display_value(value)),
            Outcome::Exited(_) | Outcome::Aborted(_) => None,
        }
    }
}

/// Lifecycle used by the binary
///
/// Bells are queued and flushed by the event loop, since the lifecycle does
/// not own the terminal.
#[derive(Debug, Default)]
pub struct SessionLifecycle {
    outcome: Option<Outcome>,
    closed: bool,
    pending_bells: usize,
}

impl SessionLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn into_outcome(self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of bells rung since the last call
    pub fn take_bells(&mut self) -> usize {
        std::mem::take(&mut self.pending_bells)
    }
}

impl Lifecycle for SessionLifecycle {
    fn fire(&mut self, event: PromptEvent) {
        self.outcome = match event {
            PromptEvent::ValueChanged(value) => {
                log::trace!("Value changed to {}", value);
                return;
            }
            PromptEvent::Submit(value) => Some(Outcome::Submitted(value)),
            PromptEvent::Exit(value) => Some(Outcome::Exited(value)),
            PromptEvent::Abort(value) => Some(Outcome::Aborted(value)),
        };
    }

    fn close(&mut self) {
        log::debug!("Session closed with {:?}", self.outcome);
        self.closed = true;
    }

    fn bell(&mut self) {
        self.pending_bells += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_changes_do_not_set_outcome() {
        let mut session = SessionLifecycle::new();
        session.fire(PromptEvent::ValueChanged(json!("a")));
        assert!(session.outcome().is_none());
        assert!(!session.is_closed());
    }

    #[test]
    fn test_submit_records_outcome() {
        let mut session = SessionLifecycle::new();
        session.fire(PromptEvent::Submit(json!("red")));
        session.close();

        assert!(session.is_closed());
        assert_eq!(session.into_outcome(), Some(Outcome::Submitted(json!("red"))));
    }

    #[test]
    fn test_bells_are_counted_and_drained() {
        let mut session = SessionLifecycle::new();
        session.bell();
        session.bell();
        assert_eq!(session.take_bells(), 2);
        assert_eq!(session.take_bells(), 0);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Submitted(json!(1)).exit_code(), 0);
        assert_eq!(Outcome::Exited(json!(1)).exit_code(), 1);
        assert_eq!(Outcome::Aborted(json!(1)).exit_code(), 130);
    }

    #[test]
    fn test_output_prints_strings_raw_and_the_rest_as_json() {
        assert_eq!(Outcome::Submitted(json!("red")).output().as_deref(), Some("red"));
        assert_eq!(
            Outcome::Submitted(json!({"hex": "#f00"})).output().as_deref(),
            Some(r##"{"hex":"#f00"}"##)
        );
        assert_eq!(Outcome::Submitted(json!(3)).output().as_deref(), Some("3"));
        assert_eq!(Outcome::Aborted(json!("red")).output(), None);
    }
}
