//! Create-form draft state and structured validation.
//!
//! The draft holds editable buffers for every [`NewBlogPost`] field plus the
//! pending category input and focus bookkeeping. Validation is decoupled from
//! presentation: [`BlogDraft::validate`] returns either the full request body
//! or a [`ValidationError`] naming the offending field, and the UI layer
//! decides how to surface it.

use chrono::{DateTime, Utc};

use blogmonk_core::{normalize_category, NewBlogPost};

/// Field focus within the create form, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Category,
    Description,
    CoverImage,
    Content,
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Category,
            FormField::Category => FormField::Description,
            FormField::Description => FormField::CoverImage,
            FormField::CoverImage => FormField::Content,
            FormField::Content => FormField::Submit,
            FormField::Submit => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Submit,
            FormField::Category => FormField::Title,
            FormField::Description => FormField::Category,
            FormField::CoverImage => FormField::Description,
            FormField::Content => FormField::CoverImage,
            FormField::Submit => FormField::Content,
        }
    }

    /// Label shown next to the field and in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Category => "Categories",
            FormField::Description => "Description",
            FormField::CoverImage => "Cover Image URL",
            FormField::Content => "Content",
            FormField::Submit => "Create Blog",
        }
    }
}

/// A client-side validation failure: which field, and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    fn new(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Ephemeral form state for composing a new post.
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    /// Added categories, normalized uppercase, order-preserving.
    pub category: Vec<String>,
    pub description: String,
    pub cover_image: String,
    pub content: String,
    /// Stamped when the draft is created or reset.
    pub date: DateTime<Utc>,
    /// Pending text in the category input, not yet added.
    pub category_input: String,
    pub focus: FormField,
    /// Which category badge the removal cursor points at.
    pub badge_cursor: usize,
    /// A submit request is in flight.
    pub submitting: bool,
    /// Inline validation or submit error to display.
    pub error: Option<String>,
}

impl BlogDraft {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            category: Vec::new(),
            description: String::new(),
            cover_image: String::new(),
            content: String::new(),
            date: now,
            category_input: String::new(),
            focus: FormField::default(),
            badge_cursor: 0,
            submitting: false,
            error: None,
        }
    }

    /// Return every field to defaults, stamping a fresh timestamp.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Self::new(now);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Append a character to whichever buffer has focus.
    pub fn input_char(&mut self, c: char) {
        self.error = None;
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Category => self.category_input.push(c),
            FormField::Description => self.description.push(c),
            FormField::CoverImage => self.cover_image.push(c),
            FormField::Content => self.content.push(c),
            FormField::Submit => {}
        }
    }

    /// Backspace in the focused buffer. In the category field with an empty
    /// input this removes the badge under the cursor instead.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Category => {
                if self.category_input.is_empty() {
                    self.remove_selected_category();
                } else {
                    self.category_input.pop();
                }
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::CoverImage => {
                self.cover_image.pop();
            }
            FormField::Content => {
                self.content.pop();
            }
            FormField::Submit => {}
        }
    }

    /// Add the pending category input: trims, uppercases, rejects empty
    /// strings and duplicates. Returns true when a category was added.
    pub fn add_category(&mut self) -> bool {
        let Some(normalized) = normalize_category(&self.category_input) else {
            return false;
        };
        if self.category.contains(&normalized) {
            // Duplicate (case-insensitive, since storage is normalized)
            self.category_input.clear();
            return false;
        }
        self.category.push(normalized);
        self.category_input.clear();
        self.badge_cursor = self.category.len() - 1;
        true
    }

    /// Remove the badge under the removal cursor.
    pub fn remove_selected_category(&mut self) {
        if self.category.is_empty() {
            return;
        }
        let idx = self.badge_cursor.min(self.category.len() - 1);
        self.category.remove(idx);
        if self.badge_cursor > 0 && self.badge_cursor >= self.category.len() {
            self.badge_cursor = self.category.len().saturating_sub(1);
        }
    }

    pub fn badge_cursor_left(&mut self) {
        self.badge_cursor = self.badge_cursor.saturating_sub(1);
    }

    pub fn badge_cursor_right(&mut self) {
        if !self.category.is_empty() && self.badge_cursor < self.category.len() - 1 {
            self.badge_cursor += 1;
        }
    }

    /// Validate the draft and build the create-request body.
    ///
    /// Violations block submission entirely; the caller must not send a
    /// partial request. Cover image is always optional.
    pub fn validate(&self) -> Result<NewBlogPost, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new(
                FormField::Title,
                "Please enter a title",
            ));
        }
        if self.category.is_empty() {
            return Err(ValidationError::new(
                FormField::Category,
                "Please add at least one category",
            ));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::new(
                FormField::Description,
                "Please enter a description",
            ));
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::new(
                FormField::Content,
                "Please enter content",
            ));
        }

        Ok(NewBlogPost {
            title: self.title.trim().to_string(),
            category: self.category.clone(),
            description: self.description.trim().to_string(),
            date: self.date,
            cover_image: self.cover_image.trim().to_string(),
            content: self.content.clone(),
        })
    }
}
