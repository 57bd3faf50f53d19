//! Test utilities for blog types
//!
//! Provides helper functions for creating test BlogPost objects.

use chrono::{DateTime, TimeZone, Utc};

use blogmonk_core::{BlogId, BlogPost, NewBlogPost};

/// Fixed reference instant used by test posts (2024-06-01 12:00 UTC).
pub fn test_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Creates a test post with basic defaults.
pub fn test_post(id: i64, title: &str) -> BlogPost {
    test_post_full(id, title, &["FINANCE"], "A short description", "Body text")
}

/// Creates a test post with full control over the displayed fields.
pub fn test_post_full(
    id: i64,
    title: &str,
    categories: &[&str],
    description: &str,
    content: &str,
) -> BlogPost {
    BlogPost {
        id: BlogId(id),
        title: title.to_string(),
        category: categories.iter().map(|c| c.to_string()).collect(),
        description: description.to_string(),
        date: test_date(),
        cover_image: String::new(),
        content: content.to_string(),
    }
}

/// Creates a valid create-request body.
pub fn test_new_post(title: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        category: vec!["FINANCE".to_string()],
        description: "A short description".to_string(),
        date: test_date(),
        cover_image: String::new(),
        content: "Body text".to_string(),
    }
}
