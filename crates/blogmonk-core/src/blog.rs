//! Blog domain types shared across all blogmonk crates.
//!
//! The wire format matches the backend's JSON: field names are camelCase
//! (`coverImage`), dates are ISO-8601, and `id` is a number assigned by the
//! server on creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cover label shown when a post has no usable cover image URL.
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/800x400?text=Blog+Image";

/// Server-assigned blog post identifier.
///
/// Assigned only by the backend on creation and never mutated client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(pub i64);

impl std::fmt::Display for BlogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A published blog post as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: BlogId,
    pub title: String,
    /// Uppercase-normalized labels, order-preserving, no duplicates.
    pub category: Vec<String>,
    pub description: String,
    pub date: DateTime<Utc>,
    /// Optional cover image URL; empty string means absent.
    #[serde(default)]
    pub cover_image: String,
    pub content: String,
}

impl BlogPost {
    /// Cover image URL to display, falling back to the placeholder when the
    /// post has none.
    pub fn cover_label(&self) -> &str {
        if self.cover_image.trim().is_empty() {
            PLACEHOLDER_COVER
        } else {
            &self.cover_image
        }
    }

    /// Categories joined for the detail meta line.
    pub fn joined_categories(&self) -> String {
        self.category.join(" & ")
    }
}

/// The body of a create request: a [`BlogPost`] minus its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub category: Vec<String>,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub cover_image: String,
    pub content: String,
}

/// Normalize a category label for storage: trim whitespace and uppercase.
///
/// Returns `None` when the trimmed label is empty.
pub fn normalize_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Number of words in a body, counting runs of whitespace as separators.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Estimated read time in minutes at 200 words per minute, never zero.
pub fn read_time_minutes(content: &str) -> u64 {
    (word_count(content) as u64).div_ceil(200).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post() -> BlogPost {
        BlogPost {
            id: BlogId(7),
            title: "Understanding GST".to_string(),
            category: vec!["FINANCE".to_string(), "TAX".to_string()],
            description: "A primer on GST".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap(),
            cover_image: String::new(),
            content: "line one\nline two".to_string(),
        }
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut p = post();
        p.cover_image = "https://example.com/cover.jpg".to_string();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["coverImage"], "https://example.com/cover.jpg");
        assert!(json.get("cover_image").is_none());
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_missing_cover_image_defaults_to_empty() {
        let json = r#"{
            "id": 1,
            "title": "T",
            "category": ["FINANCE"],
            "description": "D",
            "date": "2024-01-05T10:30:00Z",
            "content": "C"
        }"#;
        let p: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(p.cover_image, "");
        assert_eq!(p.cover_label(), PLACEHOLDER_COVER);
    }

    #[test]
    fn test_cover_label_prefers_url() {
        let mut p = post();
        p.cover_image = "https://example.com/x.png".to_string();
        assert_eq!(p.cover_label(), "https://example.com/x.png");
    }

    #[test]
    fn test_joined_categories() {
        assert_eq!(post().joined_categories(), "FINANCE & TAX");
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("  finance "), Some("FINANCE".to_string()));
        assert_eq!(normalize_category("Tax"), Some("TAX".to_string()));
        assert_eq!(normalize_category("   "), None);
        assert_eq!(normalize_category(""), None);
    }

    #[test]
    fn test_word_count_splits_on_whitespace_runs() {
        assert_eq!(word_count("one  two\tthree\nfour"), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_read_time_rounds_up() {
        let four_hundred = vec!["word"; 400].join(" ");
        assert_eq!(read_time_minutes(&four_hundred), 2);

        let two_fifty = vec!["word"; 250].join(" ");
        assert_eq!(read_time_minutes(&two_fifty), 2);

        let two_hundred = vec!["word"; 200].join(" ");
        assert_eq!(read_time_minutes(&two_hundred), 1);
    }

    #[test]
    fn test_read_time_never_zero() {
        assert_eq!(read_time_minutes("word"), 1);
        assert_eq!(read_time_minutes(""), 1);
    }

    #[test]
    fn test_new_blog_post_has_no_id_field() {
        let input = NewBlogPost {
            title: "T".to_string(),
            category: vec!["FINANCE".to_string()],
            description: "D".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap(),
            cover_image: String::new(),
            content: "C".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "T");
    }
}
