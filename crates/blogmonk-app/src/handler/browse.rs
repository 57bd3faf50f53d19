//! List and detail handlers for browse mode

use tracing::debug;

use blogmonk_core::{BlogId, BlogPost};

use crate::state::AppState;

use super::{Task, UpdateResult};

/// Start a list fetch (initial load, manual refresh, or post-invalidation).
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    let seq = state.store.begin_list();
    UpdateResult::task(Task::FetchBlogs { seq })
}

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.cursor = state.cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    let len = state.posts().map(|p| p.len()).unwrap_or(0);
    if len > 0 && state.cursor < len - 1 {
        state.cursor += 1;
    }
    UpdateResult::none()
}

/// Select the post under the cursor and fetch its detail.
pub fn handle_select_under_cursor(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.cursor_post().map(|post| post.id) else {
        return UpdateResult::none();
    };
    select_blog(state, id)
}

/// Set the selection and kick off the detail fetch. Re-selecting the same id
/// refetches; the sequence bump makes any in-flight response stale.
pub fn select_blog(state: &mut AppState, id: BlogId) -> UpdateResult {
    state.selected = Some(id);
    state.detail_scroll = 0;
    let seq = state.store.begin_detail(id);
    debug!("selected blog {} (seq {})", id, seq);
    UpdateResult::task(Task::FetchBlog { id, seq })
}

pub fn handle_blogs_loaded(
    state: &mut AppState,
    seq: u64,
    result: Result<Vec<BlogPost>, String>,
) -> UpdateResult {
    if state.store.resolve_list(seq, result) {
        state.clamp_cursor();
    }
    UpdateResult::none()
}

pub fn handle_detail_loaded(
    state: &mut AppState,
    seq: u64,
    id: BlogId,
    result: Result<Option<BlogPost>, String>,
) -> UpdateResult {
    // The store discards stale sequences; the id check is belt and braces
    // against a response outliving a cleared selection.
    if state.selected != Some(id) {
        debug!("dropping detail response for deselected blog {}", id);
        return UpdateResult::none();
    }
    state.store.resolve_detail(seq, result);
    UpdateResult::none()
}
