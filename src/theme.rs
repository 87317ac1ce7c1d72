//! Colors and modifiers used by the prompt

pub mod status {
    use ratatui::style::Color;

    pub const ACTIVE: Color = Color::Magenta;
    pub const DONE: Color = Color::Green;
    pub const ABORTED: Color = Color::Red;
    pub const EXITED: Color = Color::Yellow;
    pub const DELIMITER: Color = Color::Gray;
}

pub mod prompt {
    use ratatui::style::{Color, Modifier};

    pub const MESSAGE_MODIFIER: Modifier = Modifier::BOLD;
    pub const WARNING: Color = Color::Yellow;
    pub const FALLBACK: Color = Color::Gray;
}

pub mod row {
    use ratatui::style::{Color, Modifier};

    pub const HOVERED: Color = Color::Cyan;
    pub const HOVERED_MODIFIER: Modifier = Modifier::UNDERLINED;
    pub const DESCRIPTION: Color = Color::Gray;
    pub const DISABLED: Color = Color::Gray;
    pub const DISABLED_MODIFIER: Modifier = Modifier::CROSSED_OUT;
    pub const DISABLED_HOVERED_MODIFIER: Modifier = Modifier::UNDERLINED;
    pub const DISABLED_POINTER_MODIFIER: Modifier = Modifier::BOLD;
}
