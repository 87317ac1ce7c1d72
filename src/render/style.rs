use clap::ValueEnum;
use serde::Deserialize;

/// Symbols used in the prompt line and suggestion rows
pub mod figures {
    pub const QUESTION: &str = "?";
    pub const TICK: &str = "✔";
    pub const CROSS: &str = "✖";
    pub const POINTER: &str = "❯";
    pub const POINTER_SMALL: &str = "›";
    pub const ELLIPSIS: &str = "…";
    pub const ARROW_UP: &str = "↑";
    pub const ARROW_DOWN: &str = "↓";
}

/// How the typed input is echoed back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValueStyle {
    #[default]
    Default,
    Password,
    Invisible,
    Emoji,
}

impl ValueStyle {
    pub fn render(self, input: &str) -> String {
        let count = input.chars().count();
        match self {
            ValueStyle::Default => input.to_string(),
            ValueStyle::Password => "*".repeat(count),
            ValueStyle::Invisible => String::new(),
            ValueStyle::Emoji => "😃".repeat(count),
        }
    }

    /// Terminal columns taken by one input character
    pub fn scale(self) -> u16 {
        match self {
            ValueStyle::Default | ValueStyle::Password => 1,
            ValueStyle::Invisible => 0,
            ValueStyle::Emoji => 2,
        }
    }
}
