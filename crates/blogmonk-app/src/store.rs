//! Explicit query store for fetched backend data.
//!
//! The process-wide implicit cache of the original data-fetching layer is
//! re-modeled here as a plain value owned by `AppState`: one slot for the
//! post collection, one for the currently selected post, each tracked by a
//! sequence number.
//!
//! Sequence numbers carry the staleness guarantee: `begin_*` hands out the
//! store's current sequence for that slot, and `resolve_*` applies a result
//! only when the sequence still matches. Changing selection (or invalidating
//! the list) bumps the sequence, so a response from a superseded request is
//! discarded instead of rendered.

use blogmonk_core::{BlogId, BlogPost};

/// Lifecycle of one cached query slot.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Nothing fetched yet, or invalidated and awaiting a refetch.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Ready(T),
    /// The backend answered 404 (detail slot only).
    Missing,
    /// The last request failed; holds the human-readable description.
    Failed(String),
}

// Hand-written so the impl exists for payload types without Default
impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Cached backend data with sequence-numbered request tracking.
#[derive(Debug, Default)]
pub struct BlogStore {
    list: QueryState<Vec<BlogPost>>,
    list_seq: u64,
    detail: QueryState<BlogPost>,
    detail_for: Option<BlogId>,
    detail_seq: u64,
    next_seq: u64,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &QueryState<Vec<BlogPost>> {
        &self.list
    }

    pub fn detail(&self) -> &QueryState<BlogPost> {
        &self.detail
    }

    /// The id the detail slot currently tracks.
    pub fn detail_for(&self) -> Option<BlogId> {
        self.detail_for
    }

    /// True when the list has been invalidated (or never fetched) and the
    /// next read should trigger a fetch.
    pub fn list_is_stale(&self) -> bool {
        matches!(self.list, QueryState::Idle)
    }

    fn issue_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Start a list fetch. Returns the sequence the response must echo.
    pub fn begin_list(&mut self) -> u64 {
        self.list = QueryState::Loading;
        self.list_seq = self.issue_seq();
        self.list_seq
    }

    /// Apply a list result. Returns false when the response is stale.
    pub fn resolve_list(&mut self, seq: u64, result: Result<Vec<BlogPost>, String>) -> bool {
        if seq != self.list_seq {
            tracing::debug!("discarding stale list response (seq {})", seq);
            return false;
        }
        self.list = match result {
            Ok(posts) => QueryState::Ready(posts),
            Err(message) => QueryState::Failed(message),
        };
        true
    }

    /// Mark the cached collection stale so the next read refetches.
    ///
    /// Also bumps the sequence: an in-flight list response from before the
    /// invalidation will be discarded in favor of the refetch.
    pub fn invalidate_list(&mut self) {
        self.list = QueryState::Idle;
        self.list_seq = self.issue_seq();
    }

    /// Start a detail fetch for `id`. Returns the sequence the response must
    /// echo. Any earlier in-flight detail fetch becomes stale.
    pub fn begin_detail(&mut self, id: BlogId) -> u64 {
        self.detail = QueryState::Loading;
        self.detail_for = Some(id);
        self.detail_seq = self.issue_seq();
        self.detail_seq
    }

    /// Apply a detail result. `Ok(None)` means the backend answered 404.
    /// Returns false when the response is stale.
    pub fn resolve_detail(&mut self, seq: u64, result: Result<Option<BlogPost>, String>) -> bool {
        if seq != self.detail_seq {
            tracing::debug!("discarding stale detail response (seq {})", seq);
            return false;
        }
        self.detail = match result {
            Ok(Some(post)) => QueryState::Ready(post),
            Ok(None) => QueryState::Missing,
            Err(message) => QueryState::Failed(message),
        };
        true
    }

    /// Drop the detail slot (selection cleared).
    pub fn clear_detail(&mut self) {
        self.detail = QueryState::Idle;
        self.detail_for = None;
        self.detail_seq = self.issue_seq();
    }
}
