//! Create-post form: labeled inputs, category badges, submit button, and
//! inline validation/error reporting.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use blogmonk_app::draft::{BlogDraft, FormField};

use crate::theme::{palette, styles};

/// How many tail lines of the body are visible while typing.
const CONTENT_PREVIEW_ROWS: usize = 4;

/// The create-blog form, replacing the browse panes in create mode.
pub struct CreateForm<'a> {
    draft: &'a BlogDraft,
}

impl<'a> CreateForm<'a> {
    pub fn new(draft: &'a BlogDraft) -> Self {
        Self { draft }
    }

    fn label_style(&self, field: FormField) -> Style {
        if self.draft.focus == field {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        }
    }

    /// One-row text input: label, value, and a cursor block when focused.
    fn input_line(&self, field: FormField, value: &str, placeholder: &str) -> Line<'static> {
        let focused = self.draft.focus == field;
        let mut spans = vec![
            Span::styled(format!("{}: ", field.label()), self.label_style(field)),
        ];
        if value.is_empty() && !focused {
            spans.push(Span::styled(placeholder.to_string(), styles::text_muted()));
        } else {
            spans.push(Span::styled(value.to_string(), styles::text_primary()));
        }
        if focused {
            spans.push(Span::styled("█", styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for CreateForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block(" Create New Blog ", true)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let draft = self.draft;
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::styled(
            "Fill in the details below to create a new blog post",
            styles::text_muted(),
        ));
        lines.push(Line::raw(""));

        // Title
        lines.push(self.input_line(FormField::Title, &draft.title, "Enter blog title"));
        lines.push(Line::raw(""));

        // Categories: pending input plus added badges
        lines.push(self.input_line(
            FormField::Category,
            &draft.category_input,
            "Enter category (e.g., FINANCE)",
        ));
        if draft.category.is_empty() {
            lines.push(Line::styled(
                "  Press Enter to add categories",
                styles::text_muted(),
            ));
        } else {
            let mut badge_spans = vec![Span::raw("  ")];
            for (idx, cat) in draft.category.iter().enumerate() {
                let style = if draft.focus == FormField::Category && idx == draft.badge_cursor {
                    styles::badge_selected()
                } else {
                    styles::badge()
                };
                badge_spans.push(Span::styled(format!(" {} × ", cat), style));
                badge_spans.push(Span::raw(" "));
            }
            lines.push(Line::from(badge_spans));
        }
        lines.push(Line::raw(""));

        // Description
        lines.push(self.input_line(
            FormField::Description,
            &draft.description,
            "Brief summary of your blog",
        ));
        lines.push(Line::raw(""));

        // Cover image (always optional)
        lines.push(self.input_line(
            FormField::CoverImage,
            &draft.cover_image,
            "https://example.com/image.jpg (optional)",
        ));
        lines.push(Line::raw(""));

        // Content: label row plus the tail of the body
        lines.push(Line::styled(
            format!("{}: ", FormField::Content.label()),
            self.label_style(FormField::Content),
        ));
        if draft.content.is_empty() {
            lines.push(Line::styled(
                "  Write your blog content here...",
                styles::text_muted(),
            ));
        } else {
            let body_lines: Vec<&str> = draft.content.split('\n').collect();
            let skip = body_lines.len().saturating_sub(CONTENT_PREVIEW_ROWS);
            for (i, body_line) in body_lines.iter().enumerate().skip(skip) {
                let is_last = i == body_lines.len() - 1;
                let mut spans = vec![Span::styled(
                    format!("  {}", body_line),
                    styles::text_primary(),
                )];
                if is_last && draft.focus == FormField::Content {
                    spans.push(Span::styled("█", styles::accent()));
                }
                lines.push(Line::from(spans));
            }
        }
        lines.push(Line::raw(""));

        // Submit button
        let button_label = if draft.submitting {
            "[ Creating... ]"
        } else {
            "[ Create Blog ]"
        };
        let button_style = if draft.focus == FormField::Submit {
            styles::selected_highlight()
        } else {
            styles::accent()
        };
        lines.push(Line::from(Span::styled(button_label, button_style)));

        // Inline validation/submit error
        if let Some(error) = &draft.error {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                format!("⚠ {}", error),
                styles::status_red().add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::Utc;

    fn render(draft: &BlogDraft) -> TestTerminal {
        let mut term = TestTerminal::with_size(72, 24);
        let widget = CreateForm::new(draft);
        let area = term.area();
        term.render_widget(widget, area);
        term
    }

    #[test]
    fn test_renders_all_field_labels() {
        let draft = BlogDraft::new(Utc::now());
        let term = render(&draft);

        assert!(term.buffer_contains("Create New Blog"));
        assert!(term.buffer_contains("Title:"));
        assert!(term.buffer_contains("Categories:"));
        assert!(term.buffer_contains("Description:"));
        assert!(term.buffer_contains("Cover Image URL:"));
        assert!(term.buffer_contains("Content:"));
        assert!(term.buffer_contains("[ Create Blog ]"));
    }

    #[test]
    fn test_renders_typed_values() {
        let mut draft = BlogDraft::new(Utc::now());
        draft.title = "My Post".to_string();
        draft.description = "Summary".to_string();
        let term = render(&draft);

        assert!(term.buffer_contains("My Post"));
        assert!(term.buffer_contains("Summary"));
    }

    #[test]
    fn test_renders_category_badges() {
        let mut draft = BlogDraft::new(Utc::now());
        draft.category = vec!["FINANCE".to_string(), "TAX".to_string()];
        let term = render(&draft);

        assert!(term.buffer_contains("FINANCE ×"));
        assert!(term.buffer_contains("TAX ×"));
        assert!(!term.buffer_contains("Press Enter to add categories"));
    }

    #[test]
    fn test_empty_categories_hint() {
        let draft = BlogDraft::new(Utc::now());
        let term = render(&draft);
        assert!(term.buffer_contains("Press Enter to add categories"));
    }

    #[test]
    fn test_validation_error_shown() {
        let mut draft = BlogDraft::new(Utc::now());
        draft.error = Some("Please enter a title".to_string());
        let term = render(&draft);
        assert!(term.buffer_contains("Please enter a title"));
    }

    #[test]
    fn test_submitting_state_changes_button() {
        let mut draft = BlogDraft::new(Utc::now());
        draft.submitting = true;
        let term = render(&draft);
        assert!(term.buffer_contains("[ Creating... ]"));
    }

    #[test]
    fn test_content_tail_visible() {
        let mut draft = BlogDraft::new(Utc::now());
        draft.content = (1..=10)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let term = render(&draft);

        // Only the tail is previewed (lines 7 through 10)
        assert!(term.buffer_contains("line 10"));
        assert!(term.buffer_contains("line 7"));
        assert!(!term.buffer_contains("line 6 "));
    }
}
