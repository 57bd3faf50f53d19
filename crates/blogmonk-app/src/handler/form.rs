//! Create-form handlers: mode toggling, submission, completion

use chrono::Utc;
use tracing::{info, warn};

use blogmonk_core::BlogPost;

use crate::draft::FormField;
use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{Task, UpdateResult};

/// Switch into create mode. Entering the form clears the selection.
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Create;
    state.selected = None;
    state.store.clear_detail();
    UpdateResult::none()
}

/// Return to browse mode. The draft is kept for later correction.
pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Browse;
    UpdateResult::none()
}

/// Enter is context-sensitive: add a category, insert a newline in the body,
/// submit from the button, or advance focus on single-line fields.
pub fn handle_enter(state: &mut AppState) -> UpdateResult {
    match state.draft.focus {
        FormField::Category => {
            state.draft.add_category();
            UpdateResult::none()
        }
        FormField::Content => {
            state.draft.input_char('\n');
            UpdateResult::none()
        }
        FormField::Submit => UpdateResult::message(Message::SubmitForm),
        FormField::Title | FormField::Description | FormField::CoverImage => {
            state.draft.focus_next();
            UpdateResult::none()
        }
    }
}

/// Validate and submit. A violation surfaces a message naming the missing
/// field and issues no request.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.draft.submitting {
        return UpdateResult::none();
    }

    match state.draft.validate() {
        Ok(input) => {
            state.draft.submitting = true;
            state.draft.error = None;
            info!("submitting new blog: {}", input.title);
            UpdateResult::task(Task::CreateBlog { input })
        }
        Err(violation) => {
            state.draft.focus = violation.field;
            state.draft.error = Some(violation.message);
            UpdateResult::none()
        }
    }
}

/// Create request finished.
///
/// Success clears the draft back to defaults (fresh timestamp), shows the
/// transient notice, returns to browse mode, and invalidates the cached
/// collection; the follow-up refresh refetches it. Failure leaves the draft
/// intact and performs no invalidation.
pub fn handle_created(state: &mut AppState, result: Result<BlogPost, String>) -> UpdateResult {
    state.draft.submitting = false;

    match result {
        Ok(created) => {
            info!("blog created with id {}", created.id);
            state.draft.reset(Utc::now());
            state.show_notice("Blog created successfully!");
            state.ui_mode = UiMode::Browse;
            state.selected = None;
            state.store.clear_detail();
            state.store.invalidate_list();
            UpdateResult::message(Message::RefreshBlogs)
        }
        Err(message) => {
            warn!("blog creation failed: {}", message);
            state.draft.error = Some(format!("Failed to create blog: {}", message));
            UpdateResult::none()
        }
    }
}
