use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the prompt to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Up,
    Next,
    First,
    Last,
    PageUp,
    PageDown,
    Submit,
    Escape,
    Abort,
    /// Anything else goes to the input editor
    Edit(KeyEvent),
}

/// Map a key press to a prompt action
pub fn action_for(key: KeyEvent) -> PromptAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => PromptAction::Abort,
        KeyCode::Char('p') if ctrl => PromptAction::Up,
        KeyCode::Char('n') if ctrl => PromptAction::Next,
        KeyCode::Up => PromptAction::Up,
        KeyCode::Down | KeyCode::Tab => PromptAction::Next,
        KeyCode::Home => PromptAction::First,
        KeyCode::End => PromptAction::Last,
        KeyCode::PageUp => PromptAction::PageUp,
        KeyCode::PageDown => PromptAction::PageDown,
        KeyCode::Enter => PromptAction::Submit,
        KeyCode::Esc => PromptAction::Escape,
        _ => PromptAction::Edit(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, key_with_mods};

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action_for(key(KeyCode::Up)), PromptAction::Up);
        assert_eq!(action_for(key(KeyCode::Down)), PromptAction::Next);
        assert_eq!(action_for(key(KeyCode::Tab)), PromptAction::Next);
        assert_eq!(action_for(key(KeyCode::Home)), PromptAction::First);
        assert_eq!(action_for(key(KeyCode::End)), PromptAction::Last);
        assert_eq!(action_for(key(KeyCode::PageUp)), PromptAction::PageUp);
        assert_eq!(action_for(key(KeyCode::PageDown)), PromptAction::PageDown);
    }

    #[test]
    fn test_control_bindings() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(action_for(key_with_mods(KeyCode::Char('c'), ctrl)), PromptAction::Abort);
        assert_eq!(action_for(key_with_mods(KeyCode::Char('p'), ctrl)), PromptAction::Up);
        assert_eq!(action_for(key_with_mods(KeyCode::Char('n'), ctrl)), PromptAction::Next);
    }

    #[test]
    fn test_terminal_keys() {
        assert_eq!(action_for(key(KeyCode::Enter)), PromptAction::Submit);
        assert_eq!(action_for(key(KeyCode::Esc)), PromptAction::Escape);
    }

    #[test]
    fn test_plain_letters_edit_input() {
        let k = key(KeyCode::Char('c'));
        assert_eq!(action_for(k), PromptAction::Edit(k));

        let k = key(KeyCode::Backspace);
        assert_eq!(action_for(k), PromptAction::Edit(k));
    }
}
