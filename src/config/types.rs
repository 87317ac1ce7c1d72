// Configuration type definitions

use clap::ValueEnum;
use serde::Deserialize;

use crate::render::ValueStyle;

pub const DEFAULT_MESSAGE: &str = "Pick an option";
pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_NO_MATCHES: &str = "no matches found";
pub const DEFAULT_WARN: &str = "- This option is disabled";

/// Matcher used to filter the choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    #[default]
    StartsWith,
    Fuzzy,
}

/// Prompt configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub message: String,
    /// Rows shown at once, 0 shows every suggestion
    pub limit: usize,
    pub no_matches: String,
    pub warn: String,
    pub style: ValueStyle,
    pub clear_first: bool,
    pub submit_fallback: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            message: DEFAULT_MESSAGE.to_string(),
            limit: DEFAULT_LIMIT,
            no_matches: DEFAULT_NO_MATCHES.to_string(),
            warn: DEFAULT_WARN.to_string(),
            style: ValueStyle::Default,
            clear_first: false,
            submit_fallback: false,
        }
    }
}

/// Matcher configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct MatcherConfig {
    pub kind: MatcherKind,
    /// Artificial latency added to every match, in milliseconds
    pub delay_ms: u64,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
}
