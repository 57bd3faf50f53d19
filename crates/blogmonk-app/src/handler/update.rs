//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{browse, form, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Browse: list
        // ─────────────────────────────────────────────────────────
        Message::RefreshBlogs => browse::handle_refresh(state),
        Message::CursorUp => browse::handle_cursor_up(state),
        Message::CursorDown => browse::handle_cursor_down(state),
        Message::SelectUnderCursor => browse::handle_select_under_cursor(state),
        Message::BlogsLoaded { seq, result } => browse::handle_blogs_loaded(state, seq, result),

        // ─────────────────────────────────────────────────────────
        // Browse: detail
        // ─────────────────────────────────────────────────────────
        Message::BlogDetailLoaded { seq, id, result } => {
            browse::handle_detail_loaded(state, seq, id, result)
        }
        Message::DetailScrollUp => {
            state.detail_scroll = state.detail_scroll.saturating_sub(1);
            UpdateResult::none()
        }
        Message::DetailScrollDown => {
            state.detail_scroll = state.detail_scroll.saturating_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Mode toggling
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateForm => form::handle_open(state),
        Message::CloseCreateForm => form::handle_close(state),

        // ─────────────────────────────────────────────────────────
        // Create form
        // ─────────────────────────────────────────────────────────
        Message::FormInput(c) => {
            state.draft.input_char(c);
            UpdateResult::none()
        }
        Message::FormBackspace => {
            state.draft.backspace();
            UpdateResult::none()
        }
        Message::FormNextField => {
            state.draft.focus_next();
            UpdateResult::none()
        }
        Message::FormPrevField => {
            state.draft.focus_prev();
            UpdateResult::none()
        }
        Message::FormEnter => form::handle_enter(state),
        Message::FormBadgeLeft => {
            state.draft.badge_cursor_left();
            UpdateResult::none()
        }
        Message::FormBadgeRight => {
            state.draft.badge_cursor_right();
            UpdateResult::none()
        }
        Message::FormRemoveBadge => {
            state.draft.remove_selected_category();
            UpdateResult::none()
        }
        Message::SubmitForm => form::handle_submit(state),
        Message::BlogCreated { result } => form::handle_created(state, result),
    }
}
