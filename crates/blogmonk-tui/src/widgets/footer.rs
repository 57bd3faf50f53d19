//! Footer strapline: blurb, categories, and contact.

use chrono::{Datelike, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Bottom footer with the blog blurb and contact line.
pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "CA Monk",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                "FINANCE · ACCOUNTING · CAREER GROWTH · TECHNOLOGY",
                styles::text_muted(),
            ),
        ]);
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        let right_line = Line::from(vec![
            Span::styled("hello@camonk.com", styles::text_secondary()),
            Span::styled(
                format!("  © {} CA Monk ", Utc::now().year()),
                styles::text_muted(),
            ),
        ]);
        let right_width = right_line.width() as u16;
        let left_width = left_line.width() as u16;
        let right_x = (inner.x + inner.width).saturating_sub(right_width);
        if right_x > inner.x + left_width {
            buf.set_line(right_x, inner.y, &right_line, right_width);
        }
    }
}
