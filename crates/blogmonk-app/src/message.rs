//! Message types for the application (TEA pattern)

use blogmonk_core::{BlogId, BlogPost};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notice countdown)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Browse: list
    // ─────────────────────────────────────────────────────────
    /// Fetch (or refetch) the post collection
    RefreshBlogs,
    /// Move the list cursor up one card
    CursorUp,
    /// Move the list cursor down one card
    CursorDown,
    /// Select the post under the cursor (opens the detail view)
    SelectUnderCursor,
    /// List fetch finished (errors already stringified for display)
    BlogsLoaded {
        seq: u64,
        result: Result<Vec<BlogPost>, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Browse: detail
    // ─────────────────────────────────────────────────────────
    /// Detail fetch finished; `Ok(None)` means the backend answered 404
    BlogDetailLoaded {
        seq: u64,
        id: BlogId,
        result: Result<Option<BlogPost>, String>,
    },
    /// Scroll the detail pane up
    DetailScrollUp,
    /// Scroll the detail pane down
    DetailScrollDown,

    // ─────────────────────────────────────────────────────────
    // Mode toggling
    // ─────────────────────────────────────────────────────────
    /// Switch to the create form (clears the selection)
    OpenCreateForm,
    /// Return to browse mode, draft retained
    CloseCreateForm,

    // ─────────────────────────────────────────────────────────
    // Create form
    // ─────────────────────────────────────────────────────────
    /// Character input into the focused field
    FormInput(char),
    /// Backspace in the focused field
    FormBackspace,
    /// Move focus to the next field
    FormNextField,
    /// Move focus to the previous field
    FormPrevField,
    /// Enter pressed: add category / newline in content / advance / submit,
    /// depending on the focused field
    FormEnter,
    /// Move the category badge cursor left
    FormBadgeLeft,
    /// Move the category badge cursor right
    FormBadgeRight,
    /// Remove the category badge under the cursor
    FormRemoveBadge,
    /// Validate and submit the draft
    SubmitForm,
    /// Create request finished
    BlogCreated { result: Result<BlogPost, String> },
}
