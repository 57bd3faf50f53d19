//! # blogmonk-core - Core Domain Types
//!
//! Foundation crate for blogmonk. Provides the blog domain types, error
//! handling, date formatting, and logging initialization.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`blog`)
//! - [`BlogPost`] - A published article as returned by the backend
//! - [`NewBlogPost`] - The create-request body (a [`BlogPost`] minus its id)
//! - [`BlogId`] - Server-assigned post identifier
//! - [`normalize_category()`] - Trim + uppercase a category label
//! - [`read_time_minutes()`] - Estimated read time at 200 words per minute
//!
//! ### Date Formatting (`timefmt`)
//! - [`relative_date()`] - "Today" / "3 days ago" / "2 weeks ago" style
//! - [`long_date()`] - "January 5, 2024" style
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use blogmonk_core::prelude::*;
//! ```

pub mod blog;
pub mod error;
pub mod logging;
pub mod timefmt;

/// Prelude for common imports used throughout all blogmonk crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use blog::{
    normalize_category, read_time_minutes, word_count, BlogId, BlogPost, NewBlogPost,
    PLACEHOLDER_COVER,
};
pub use error::{Error, Result, ResultExt};
pub use timefmt::{long_date, relative_date};
