//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(key),
        UiMode::Create => handle_key_create(state, key),
    }
}

/// Handle key events in browse mode (list + detail panes)
fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // List navigation
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Enter => Some(Message::SelectUnderCursor),

        // Detail pane scrolling
        InputKey::PageUp => Some(Message::DetailScrollUp),
        InputKey::PageDown => Some(Message::DetailScrollDown),

        // Mode and data
        InputKey::Char('n') => Some(Message::OpenCreateForm),
        InputKey::Char('r') => Some(Message::RefreshBlogs),

        _ => None,
    }
}

/// Handle key events in create mode (form)
fn handle_key_create(state: &AppState, key: InputKey) -> Option<Message> {
    use crate::draft::FormField;

    match key {
        // Leave the form (draft retained)
        InputKey::Esc => Some(Message::CloseCreateForm),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Submit from anywhere
        InputKey::CharCtrl('s') => Some(Message::SubmitForm),

        // Focus movement
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),

        // Badge cursor in the category field; ignored elsewhere
        InputKey::Left if state.draft.focus == FormField::Category => Some(Message::FormBadgeLeft),
        InputKey::Right if state.draft.focus == FormField::Category => {
            Some(Message::FormBadgeRight)
        }
        InputKey::Delete if state.draft.focus == FormField::Category => {
            Some(Message::FormRemoveBadge)
        }

        // Text entry
        InputKey::Enter => Some(Message::FormEnter),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormInput(c)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::FormField;

    #[test]
    fn test_browse_quit_keys() {
        let state = AppState::new();
        assert!(matches!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::Quit)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::Quit)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }

    #[test]
    fn test_browse_navigation_keys() {
        let state = AppState::new();
        assert!(matches!(
            handle_key(&state, InputKey::Up),
            Some(Message::CursorUp)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Char('j')),
            Some(Message::CursorDown)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::SelectUnderCursor)
        ));
    }

    #[test]
    fn test_browse_mode_and_refresh_keys() {
        let state = AppState::new();
        assert!(matches!(
            handle_key(&state, InputKey::Char('n')),
            Some(Message::OpenCreateForm)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Char('r')),
            Some(Message::RefreshBlogs)
        ));
    }

    #[test]
    fn test_create_typing_goes_to_form() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::Create;
        assert!(matches!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::FormInput('q'))
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Backspace),
            Some(Message::FormBackspace)
        ));
    }

    #[test]
    fn test_create_escape_closes_form() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::Create;
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::CloseCreateForm)
        ));
    }

    #[test]
    fn test_create_ctrl_s_submits() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::Create;
        assert!(matches!(
            handle_key(&state, InputKey::CharCtrl('s')),
            Some(Message::SubmitForm)
        ));
    }

    #[test]
    fn test_badge_keys_only_in_category_field() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::Create;

        // Title focused: Left is ignored
        assert!(handle_key(&state, InputKey::Left).is_none());

        state.draft.focus = FormField::Category;
        assert!(matches!(
            handle_key(&state, InputKey::Left),
            Some(Message::FormBadgeLeft)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Delete),
            Some(Message::FormRemoveBadge)
        ));
    }
}
