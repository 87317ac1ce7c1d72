//! Command line arguments and choice loading

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::candidate::RawChoice;
use crate::config::{Config, MatcherKind};
use crate::error::AutopromptError;
use crate::prompt::{Initial, PromptOptions};
use crate::render::ValueStyle;

/// Interactive autocomplete prompt; prints the chosen value to stdout
#[derive(Parser, Debug)]
#[command(name = "autoprompt", version, about)]
pub struct Args {
    /// File with choices: a JSON array, or one choice per line ("-" or absent reads stdin)
    pub choices: Option<PathBuf>,

    /// Question shown before the input
    #[arg(short, long)]
    pub message: Option<String>,

    /// Rows shown at once (0 shows every suggestion)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Initially selected choice, by index or by title/value
    #[arg(short, long)]
    pub initial: Option<Initial>,

    /// Title shown while nothing matches
    #[arg(long)]
    pub fallback: Option<String>,

    /// How typed input is echoed
    #[arg(long, value_enum)]
    pub style: Option<ValueStyle>,

    /// Fallback title when neither --fallback nor --initial is given
    #[arg(long)]
    pub no_matches: Option<String>,

    /// Hint shown while a disabled choice is selected
    #[arg(long)]
    pub warn: Option<String>,

    /// Esc clears the input before it exits
    #[arg(long)]
    pub clear_first: bool,

    /// Enter on an empty list submits the fallback
    #[arg(long)]
    pub submit_fallback: bool,

    /// Matching strategy
    #[arg(long, value_enum)]
    pub matcher: Option<MatcherKind>,

    /// Artificial matcher latency in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Config file (default: <config dir>/autoprompt/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Override file configuration with the flags that were given
    pub fn apply_to(&self, config: &mut Config) {
        let prompt = &mut config.prompt;
        if let Some(message) = &self.message {
            prompt.message = message.clone();
        }
        if let Some(limit) = self.limit {
            prompt.limit = limit;
        }
        if let Some(style) = self.style {
            prompt.style = style;
        }
        if let Some(no_matches) = &self.no_matches {
            prompt.no_matches = no_matches.clone();
        }
        if let Some(warn) = &self.warn {
            prompt.warn = warn.clone();
        }
        prompt.clear_first |= self.clear_first;
        prompt.submit_fallback |= self.submit_fallback;

        if let Some(kind) = self.matcher {
            config.matcher.kind = kind;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.matcher.delay_ms = delay_ms;
        }
    }

    pub fn prompt_options(&self, config: &Config, choices: Vec<RawChoice>) -> PromptOptions {
        PromptOptions {
            initial: self.initial.clone(),
            fallback: self.fallback.as_deref().map(RawChoice::from),
            ..PromptOptions::from_config(&config.prompt, choices)
        }
    }

    /// Choices file, `None` when stdin should be read
    pub fn choices_path(&self) -> Option<&Path> {
        self.choices
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// Read choices from `path`, or from stdin when `None`
pub fn load_choices(path: Option<&Path>) -> Result<Vec<RawChoice>, AutopromptError> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            content
        }
    };
    parse_choices(&content)
}

/// Parse a JSON array of choices, or plain text with one choice per line
pub fn parse_choices(content: &str) -> Result<Vec<RawChoice>, AutopromptError> {
    let trimmed = content.trim();

    let choices: Vec<RawChoice> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).map_err(|e| AutopromptError::InvalidChoices(e.to_string()))?
    } else {
        trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(RawChoice::from)
            .collect()
    };

    if choices.is_empty() {
        return Err(AutopromptError::NoChoices);
    }
    log::debug!("Loaded {} choices", choices.len());
    Ok(choices)
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
