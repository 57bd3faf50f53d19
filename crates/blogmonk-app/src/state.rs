//! Application state (Model in TEA pattern)

use chrono::Utc;

use blogmonk_core::{BlogId, BlogPost};

use crate::config::Settings;
use crate::draft::BlogDraft;
use crate::store::BlogStore;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// List + detail panes
    #[default]
    Browse,

    /// Create-post form replaces the browse panes
    Create,
}

/// Transient banner shown after a successful creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// Remaining ticks before the banner disappears.
    pub ticks_left: u32,
}

/// Top-level application state.
///
/// The shell owns exactly two pieces of navigation state: the selected post
/// id (nullable) and the UI mode. Everything else is the query store, the
/// form draft, and presentation bookkeeping.
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    /// Currently selected post, highlighted in the list; None shows the
    /// placeholder prompt in the detail pane.
    pub selected: Option<BlogId>,
    /// List cursor position (navigation, distinct from selection).
    pub cursor: usize,
    /// Detail pane scroll offset in rows.
    pub detail_scroll: u16,
    pub store: BlogStore,
    pub draft: BlogDraft,
    pub notice: Option<Notice>,
    pub settings: Settings,
    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            ui_mode: UiMode::default(),
            selected: None,
            cursor: 0,
            detail_scroll: 0,
            store: BlogStore::new(),
            draft: BlogDraft::new(Utc::now()),
            notice: None,
            settings,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Posts currently available for the list view, if loaded.
    pub fn posts(&self) -> Option<&[BlogPost]> {
        self.store.list().ready().map(|posts| posts.as_slice())
    }

    /// The post under the list cursor.
    pub fn cursor_post(&self) -> Option<&BlogPost> {
        self.posts().and_then(|posts| posts.get(self.cursor))
    }

    /// Keep the cursor inside the loaded collection.
    pub fn clamp_cursor(&mut self) {
        let len = self.posts().map(|p| p.len()).unwrap_or(0);
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            ticks_left: self.settings.ui.notice_ticks,
        });
    }

    /// Count down the transient notice; drops it at zero.
    pub fn tick_notice(&mut self) {
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
