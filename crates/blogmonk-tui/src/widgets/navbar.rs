//! Top navbar: app title, tagline, key hints, and the transient notice.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use blogmonk_app::state::UiMode;

use crate::theme::{palette, styles};

/// Main navbar showing the blog title, tagline, mode-aware key hints,
/// and the success notice when one is active.
pub struct Navbar<'a> {
    mode: UiMode,
    notice: Option<&'a str>,
}

impl<'a> Navbar<'a> {
    pub fn new(mode: UiMode) -> Self {
        Self { mode, notice: None }
    }

    /// Show a transient notice on the right-hand side
    pub fn with_notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left section: brand + tagline
        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "CA Monk",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", Style::default().fg(palette::TEXT_MUTED)),
            Span::raw(" "),
            Span::styled("Finance & Career", Style::default().fg(palette::TEXT_SECONDARY)),
        ]);
        let left_width = left_line.width() as u16;

        // Center section: key hints for the active mode
        let shortcuts = match self.mode {
            UiMode::Browse => vec![
                hint_key("↑↓"),
                hint_label("] Browse  "),
                hint_key("Enter"),
                hint_label("] Read  "),
                hint_key("n"),
                hint_label("] New Blog  "),
                hint_key("r"),
                hint_label("] Refresh  "),
                hint_key("q"),
                hint_label("] Quit"),
            ],
            UiMode::Create => vec![
                hint_key("Tab"),
                hint_label("] Next Field  "),
                hint_key("Ctrl+S"),
                hint_label("] Publish  "),
                hint_key("Esc"),
                hint_label("] View Blogs"),
            ],
        };
        let shortcuts_line = Line::from(shortcuts);
        let shortcuts_width = shortcuts_line.width() as u16;

        // Right section: transient notice
        let notice_line = self.notice.map(|text| {
            Line::from(vec![
                Span::styled(text, styles::status_green().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
            ])
        });
        let notice_width = notice_line.as_ref().map(|l| l.width() as u16).unwrap_or(0);

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // The notice takes priority over the key hints when space is tight
        let notice_x = (inner.x + inner.width).saturating_sub(notice_width);
        let right_limit = if notice_line.is_some() {
            notice_x
        } else {
            inner.x + inner.width
        };

        let shortcuts_x = inner.x + left_width + 2;
        if shortcuts_x + shortcuts_width <= right_limit {
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
        }

        if let Some(notice_line) = notice_line {
            if notice_x >= inner.x + left_width + 2 {
                buf.set_line(notice_x, inner.y, &notice_line, notice_width);
            }
        }
    }
}

fn hint_key(key: &str) -> Span<'_> {
    Span::styled(format!("[{}", key), styles::keybinding())
}

fn hint_label(label: &str) -> Span<'_> {
    Span::styled(label, styles::text_muted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_navbar_renders_brand() {
        let mut term = TestTerminal::new();
        let navbar = Navbar::new(UiMode::Browse);
        term.render_widget(navbar, term.area());

        assert!(term.buffer_contains("CA Monk"));
        assert!(term.buffer_contains("Finance & Career"));
    }

    #[test]
    fn test_navbar_browse_hints() {
        let mut term = TestTerminal::with_size(120, 5);
        let navbar = Navbar::new(UiMode::Browse);
        term.render_widget(navbar, term.area());

        assert!(term.buffer_contains("New Blog"));
        assert!(term.buffer_contains("Quit"));
    }

    #[test]
    fn test_navbar_create_hints() {
        let mut term = TestTerminal::with_size(120, 5);
        let navbar = Navbar::new(UiMode::Create);
        term.render_widget(navbar, term.area());

        assert!(term.buffer_contains("Publish"));
        assert!(term.buffer_contains("View Blogs"));
    }

    #[test]
    fn test_navbar_shows_notice() {
        let mut term = TestTerminal::with_size(120, 5);
        let navbar = Navbar::new(UiMode::Browse).with_notice(Some("Blog created successfully!"));
        term.render_widget(navbar, term.area());

        assert!(term.buffer_contains("Blog created successfully!"));
    }

    #[test]
    fn test_navbar_tiny_area_does_not_panic() {
        let mut term = TestTerminal::with_size(10, 2);
        let navbar = Navbar::new(UiMode::Browse);
        term.render_widget(navbar, term.area());
    }
}
