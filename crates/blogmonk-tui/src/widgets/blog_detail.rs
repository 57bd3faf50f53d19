//! Blog detail pane: placeholder, skeleton, error, not-found, and article
//! states.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use blogmonk_app::store::QueryState;
use blogmonk_core::{long_date, read_time_minutes, BlogPost};

use crate::theme::{palette, styles};

/// Right pane rendering the selected post's full content.
pub struct BlogDetail<'a> {
    detail: &'a QueryState<BlogPost>,
    /// No post selected at all: show the placeholder prompt.
    has_selection: bool,
    scroll: u16,
}

impl<'a> BlogDetail<'a> {
    pub fn new(detail: &'a QueryState<BlogPost>, has_selection: bool) -> Self {
        Self {
            detail,
            has_selection,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for BlogDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if !self.has_selection {
            render_placeholder(inner, buf);
            return;
        }

        match self.detail {
            QueryState::Idle | QueryState::Loading => render_skeleton(inner, buf),
            QueryState::Failed(message) => render_error(inner, buf, message),
            QueryState::Missing => render_not_found(inner, buf),
            QueryState::Ready(post) => self.render_post(inner, buf, post),
        }
    }
}

impl BlogDetail<'_> {
    fn render_post(&self, area: Rect, buf: &mut Buffer, post: &BlogPost) {
        let mut lines: Vec<Line> = Vec::new();

        // Cover banner (the terminal's stand-in for the cover image)
        lines.push(Line::from(vec![
            Span::styled("▦ ", styles::accent()),
            Span::styled(post.cover_label().to_string(), styles::text_muted()),
        ]));
        lines.push(Line::raw(""));

        // Category badges
        let mut badge_spans = Vec::new();
        for cat in &post.category {
            badge_spans.push(Span::styled(format!(" {} ", cat), styles::badge()));
            badge_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(badge_spans));
        lines.push(Line::raw(""));

        // Title
        lines.push(Line::styled(
            post.title.clone(),
            Style::default()
                .fg(palette::TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(""));

        // Meta line: categories | long date | read time
        let meta = format!(
            "Category: {} | Date: {} | {} min read",
            post.joined_categories(),
            long_date(post.date),
            read_time_minutes(&post.content),
        );
        lines.push(Line::styled(meta, styles::text_muted()));
        lines.push(Line::styled(
            "─".repeat(area.width as usize),
            styles::border_inactive(),
        ));
        lines.push(Line::raw(""));

        // Description
        lines.push(Line::styled(
            post.description.clone(),
            styles::text_secondary().add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::raw(""));

        // Body with preserved line breaks
        for body_line in post.content.split('\n') {
            lines.push(Line::styled(body_line.to_string(), styles::text_primary()));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

fn render_placeholder(area: Rect, buf: &mut Buffer) {
    let y = area.y + area.height / 2;
    let lines = [
        ("Select a blog to read", styles::text_secondary().add_modifier(Modifier::BOLD)),
        (
            "Choose any article from the list to view its full content",
            styles::text_muted(),
        ),
    ];
    for (i, (text, style)) in lines.iter().enumerate() {
        let width = text.len() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        if y + (i as u16) < area.y + area.height {
            buf.set_line(x, y + i as u16, &Line::styled(*text, *style), width);
        }
    }
}

fn render_skeleton(area: Rect, buf: &mut Buffer) {
    // Mirror the loaded structure: cover band, badge stub, title stub, body
    let rows: [(u16, u16); 6] = [
        (0, area.width.saturating_sub(2)),
        (2, area.width / 4),
        (3, area.width / 2),
        (5, area.width.saturating_sub(2)),
        (6, area.width.saturating_sub(2)),
        (7, (area.width / 4) * 3),
    ];
    for (row, width) in rows {
        if row >= area.height {
            break;
        }
        let bar = "▒".repeat(width as usize);
        buf.set_line(
            area.x + 1,
            area.y + row,
            &Line::styled(bar, styles::skeleton()),
            area.width,
        );
    }
}

fn render_error(area: Rect, buf: &mut Buffer, message: &str) {
    let y = area.y + area.height / 3;
    buf.set_line(
        area.x + 1,
        y,
        &Line::styled(
            "Error loading blog",
            styles::status_red().add_modifier(Modifier::BOLD),
        ),
        area.width,
    );
    if y + 1 < area.y + area.height {
        buf.set_line(
            area.x + 1,
            y + 1,
            &Line::styled(message.to_string(), styles::status_red()),
            area.width,
        );
    }
}

fn render_not_found(area: Rect, buf: &mut Buffer) {
    let text = "Blog not found";
    let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;
    buf.set_line(
        x,
        area.y + area.height / 2,
        &Line::styled(text, styles::text_secondary()),
        area.width,
    );
}
