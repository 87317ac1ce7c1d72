use std::convert::Infallible;
use std::str::FromStr;

use crate::candidate::{Candidate, RawChoice};
use crate::config::{DEFAULT_LIMIT, DEFAULT_MESSAGE, DEFAULT_NO_MATCHES, DEFAULT_WARN, PromptConfig};
use crate::render::ValueStyle;

/// Initially selected choice, by position or by title/value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initial {
    Index(usize),
    Text(String),
}

impl Initial {
    /// Position in `choices`, `None` when no choice matches the text
    pub fn resolve(&self, choices: &[Candidate]) -> Option<usize> {
        match self {
            Initial::Index(index) => Some(*index),
            Initial::Text(text) => choices.iter().position(|c| c.matches_text(text)),
        }
    }
}

impl FromStr for Initial {
    type Err = Infallible;

    /// Digits select by position, anything else by title or value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) => Initial::Index(index),
            Err(_) => Initial::Text(s.to_string()),
        })
    }
}

/// Everything needed to build a prompt
#[derive(Debug, Clone, PartialEq)]
pub struct PromptOptions {
    pub message: String,
    pub choices: Vec<RawChoice>,
    pub initial: Option<Initial>,
    /// Rows shown at once, 0 shows every suggestion
    pub limit: usize,
    pub no_matches: String,
    /// Shown while the list is empty; defaults to the initial choice
    pub fallback: Option<RawChoice>,
    /// Esc clears non-empty input before it exits
    pub clear_first: bool,
    pub warn: String,
    pub style: ValueStyle,
    pub submit_fallback: bool,
}

impl PromptOptions {
    pub fn new(message: impl Into<String>, choices: Vec<RawChoice>) -> Self {
        Self {
            message: message.into(),
            choices,
            ..Self::default()
        }
    }

    pub fn from_config(config: &PromptConfig, choices: Vec<RawChoice>) -> Self {
        Self {
            message: config.message.clone(),
            choices,
            initial: None,
            limit: config.limit,
            no_matches: config.no_matches.clone(),
            fallback: None,
            clear_first: config.clear_first,
            warn: config.warn.clone(),
            style: config.style,
            submit_fallback: config.submit_fallback,
        }
    }
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            choices: Vec::new(),
            initial: None,
            limit: DEFAULT_LIMIT,
            no_matches: DEFAULT_NO_MATCHES.to_string(),
            fallback: None,
            clear_first: false,
            warn: DEFAULT_WARN.to_string(),
            style: ValueStyle::Default,
            submit_fallback: false,
        }
    }
}
