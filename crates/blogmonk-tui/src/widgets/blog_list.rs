//! Blog list pane: skeleton, error, empty, and card states.

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use blogmonk_app::store::QueryState;
use blogmonk_core::{relative_date, BlogId, BlogPost};

use crate::theme::{palette, styles};

use super::truncate_with_ellipsis;

/// Rows one card occupies: badges+date, title, description, spacer.
const CARD_HEIGHT: u16 = 4;

/// Left pane listing all posts as selectable summary cards.
pub struct BlogList<'a> {
    list: &'a QueryState<Vec<BlogPost>>,
    cursor: usize,
    selected: Option<BlogId>,
    skeleton_rows: usize,
    now: DateTime<Utc>,
}

impl<'a> BlogList<'a> {
    pub fn new(list: &'a QueryState<Vec<BlogPost>>, cursor: usize, selected: Option<BlogId>) -> Self {
        Self {
            list,
            cursor,
            selected,
            skeleton_rows: 3,
            now: Utc::now(),
        }
    }

    /// Number of skeleton cards shown while loading (from settings)
    pub fn skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = rows;
        self
    }

    /// Fix "now" for deterministic relative dates (tests)
    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl Widget for BlogList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block(" Latest Articles ", true)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.list {
            QueryState::Idle | QueryState::Loading => {
                self.render_skeletons(inner, buf);
            }
            QueryState::Failed(message) => {
                render_error(inner, buf, message);
            }
            QueryState::Ready(posts) if posts.is_empty() => {
                render_empty(inner, buf);
            }
            QueryState::Ready(posts) => {
                self.render_cards(inner, buf, posts);
            }
            // The list slot never resolves to Missing; render nothing
            QueryState::Missing => {}
        }
    }
}

impl BlogList<'_> {
    fn render_skeletons(&self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for _ in 0..self.skeleton_rows {
            if y + 3 > area.y + area.height {
                break;
            }
            let widths = [area.width / 3, area.width.saturating_sub(4), area.width / 2];
            for (row, w) in widths.iter().enumerate() {
                let bar = "▒".repeat(*w as usize);
                buf.set_line(
                    area.x + 1,
                    y + row as u16,
                    &Line::styled(bar, styles::skeleton()),
                    area.width,
                );
            }
            y += CARD_HEIGHT;
        }
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer, posts: &[BlogPost]) {
        let cards_fit = (area.height / CARD_HEIGHT).max(1) as usize;
        let first = if self.cursor >= cards_fit {
            self.cursor + 1 - cards_fit
        } else {
            0
        };

        let mut y = area.y;
        for (idx, post) in posts.iter().enumerate().skip(first) {
            // A card writes three rows; the spacer row may fall off the edge
            if y + 3 > area.y + area.height {
                break;
            }
            self.render_card(area, buf, y, post, idx);
            y += CARD_HEIGHT;
        }

        // Scroll indicator when cards are cut off below
        if first + cards_fit < posts.len() {
            let hint = Line::styled("↓ more", styles::text_muted());
            buf.set_line(
                area.x + area.width.saturating_sub(7),
                area.y + area.height - 1,
                &hint,
                7,
            );
        }
    }

    fn render_card(&self, area: Rect, buf: &mut Buffer, y: u16, post: &BlogPost, idx: usize) {
        let is_cursor = idx == self.cursor;
        let is_selected = self.selected == Some(post.id);

        // Badges + relative date
        let mut spans = vec![Span::raw(if is_cursor { "▸ " } else { "  " })];
        for cat in &post.category {
            spans.push(Span::styled(format!(" {} ", cat), styles::badge()));
            spans.push(Span::raw(" "));
        }
        let badge_line = Line::from(spans);
        let badge_width = badge_line.width() as u16;
        buf.set_line(area.x, y, &badge_line, area.width);

        let date_text = relative_date(post.date, self.now);
        let date_width = date_text.len() as u16;
        let date_x = (area.x + area.width).saturating_sub(date_width + 1);
        if date_x > area.x + badge_width {
            buf.set_line(
                date_x,
                y,
                &Line::styled(date_text, styles::text_muted()),
                date_width,
            );
        }

        // Title
        let title_style = if is_selected {
            styles::selected_highlight()
        } else if is_cursor {
            styles::accent_bold()
        } else {
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        };
        let title = truncate_with_ellipsis(&post.title, area.width.saturating_sub(3) as usize);
        buf.set_line(
            area.x + 2,
            y + 1,
            &Line::styled(title, title_style),
            area.width.saturating_sub(2),
        );

        // Truncated description (the web card's two-line clamp)
        let description =
            truncate_with_ellipsis(&post.description, area.width.saturating_sub(3) as usize);
        buf.set_line(
            area.x + 2,
            y + 2,
            &Line::styled(description, styles::text_secondary()),
            area.width.saturating_sub(2),
        );
    }
}

fn render_error(area: Rect, buf: &mut Buffer, message: &str) {
    buf.set_line(
        area.x + 1,
        area.y,
        &Line::styled(
            "Error loading blogs",
            styles::status_red().add_modifier(Modifier::BOLD),
        ),
        area.width,
    );
    if area.height > 1 {
        let detail = truncate_with_ellipsis(message, area.width.saturating_sub(2) as usize);
        buf.set_line(
            area.x + 1,
            area.y + 1,
            &Line::styled(detail, styles::status_red()),
            area.width,
        );
    }
}

fn render_empty(area: Rect, buf: &mut Buffer) {
    let y = area.y + area.height / 3;
    buf.set_line(
        area.x + 1,
        y,
        &Line::styled("No blogs found.", styles::text_secondary()),
        area.width,
    );
    if area.height > 1 {
        buf.set_line(
            area.x + 1,
            y + 1,
            &Line::styled("Create your first blog!", styles::text_muted()),
            area.width,
        );
    }
}
