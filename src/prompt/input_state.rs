use crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line text input backing the prompt
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Cursor position in characters from the start of the line
    pub fn cursor_column(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Feed a key to the editor, returns whether the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Replace the text and leave the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        // Newlines would split the single-line input
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.textarea.insert_str(line);
    }

    pub fn clear(&mut self) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, key_with_mods};
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_typing_modifies_text() {
        let mut input = InputState::new();
        assert!(input.handle_key(key(KeyCode::Char('a'))));
        assert!(input.handle_key(key(KeyCode::Char('b'))));
        assert_eq!(input.text(), "ab");
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_cursor_movement_is_not_a_modification() {
        let mut input = InputState::new();
        input.set_text("abc");
        assert!(!input.handle_key(key(KeyCode::Left)));
        assert_eq!(input.cursor_column(), 2);
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_backspace_on_empty_is_not_a_modification() {
        let mut input = InputState::new();
        assert!(!input.handle_key(key(KeyCode::Backspace)));
        assert!(input.is_empty());
    }

    #[test]
    fn test_set_text_replaces_and_moves_cursor_to_end() {
        let mut input = InputState::new();
        input.set_text("first");
        input.set_text("second");
        assert_eq!(input.text(), "second");
        assert_eq!(input.cursor_column(), 6);
    }

    #[test]
    fn test_set_text_drops_newlines() {
        let mut input = InputState::new();
        input.set_text("a\nb");
        assert_eq!(input.text(), "ab");
        assert_eq!(input.textarea.lines().len(), 1);
    }

    #[test]
    fn test_clear_with_cursor_in_middle() {
        let mut input = InputState::new();
        input.set_text("hello");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.clear();
        assert!(input.is_empty());
    }

    #[test]
    fn test_ctrl_k_deletes_to_line_end() {
        let mut input = InputState::new();
        input.set_text("hello");
        input.handle_key(key(KeyCode::Home));
        assert!(input.handle_key(key_with_mods(KeyCode::Char('k'), KeyModifiers::CONTROL)));
        assert!(input.is_empty());
    }
}
