//! Full-screen rendering tests driving `view` through a TestBackend

use blogmonk_api::test_utils::{test_post, test_post_full};
use blogmonk_app::state::{AppState, UiMode};

use crate::test_utils::TestTerminal;

use super::view;

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_initial_screen_shows_skeletons_and_placeholder() {
    let mut state = AppState::new();
    state.store.begin_list();
    let term = draw(&state);

    assert!(term.buffer_contains("CA Monk"));
    assert!(term.buffer_contains("Latest Articles"));
    assert!(term.buffer_contains("▒"));
    assert!(term.buffer_contains("Select a blog to read"));
    assert!(term.buffer_contains("hello@camonk.com"));
}

#[test]
fn test_browse_screen_with_posts_and_selection() {
    let mut state = AppState::new();
    let seq = state.store.begin_list();
    state.store.resolve_list(
        seq,
        Ok(vec![
            test_post_full(1, "First Post", &["FINANCE"], "Money stuff", "c"),
            test_post(2, "Second Post"),
        ]),
    );
    state.selected = Some(blogmonk_core::BlogId(1));
    let seq = state.store.begin_detail(blogmonk_core::BlogId(1));
    state.store.resolve_detail(
        seq,
        Ok(Some(test_post_full(
            1,
            "First Post",
            &["FINANCE"],
            "Money stuff",
            "Full body of the article",
        ))),
    );

    let term = draw(&state);
    assert!(term.buffer_contains("First Post"));
    assert!(term.buffer_contains("Second Post"));
    assert!(term.buffer_contains("Full body of the article"));
    assert!(term.buffer_contains("1 min read"));
}

#[test]
fn test_create_screen_shows_form() {
    let mut state = AppState::new();
    state.ui_mode = UiMode::Create;
    let term = draw(&state);

    assert!(term.buffer_contains("Create New Blog"));
    assert!(term.buffer_contains("Title:"));
    // Browse panes are replaced entirely
    assert!(!term.buffer_contains("Latest Articles"));
}

#[test]
fn test_notice_banner_visible() {
    let mut state = AppState::new();
    state.store.begin_list();
    state.show_notice("Blog created successfully!");
    let term = draw(&state);

    assert!(term.buffer_contains("Blog created successfully!"));
}

#[test]
fn test_empty_collection_message() {
    let mut state = AppState::new();
    let seq = state.store.begin_list();
    state.store.resolve_list(seq, Ok(Vec::new()));
    let term = draw(&state);

    assert!(term.buffer_contains("No blogs found."));
}
