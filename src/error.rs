use thiserror::Error;

/// Errors raised while loading choices and configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutopromptError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid choices: {0}")]
    InvalidChoices(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No choices given.\n\nPass a file, or pipe a JSON array or one choice per line on stdin.")]
    NoChoices,
}

impl From<std::io::Error> for AutopromptError {
    fn from(err: std::io::Error) -> Self {
        AutopromptError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
