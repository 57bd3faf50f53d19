//! Screen layout definitions for the TUI
//!
//! The full-page composition mirrors the blog's web layout: navbar on top,
//! footer at the bottom, and the content area either split into list +
//! detail panes (browse mode) or given entirely to the create form.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navbar (title, tagline, key hints, notice)
    pub navbar: Rect,

    /// Main content (browse panes or the create form)
    pub content: Rect,

    /// Footer strapline
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Navbar (bordered, one inner row)
        Constraint::Min(6),    // Content
        Constraint::Length(3), // Footer (bordered, one inner row)
    ])
    .split(area);

    ScreenAreas {
        navbar: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Split the content area into the list (left third) and detail (remainder),
/// matching the web layout's 1:2 column grid.
pub fn browse_panes(content: Rect) -> (Rect, Rect) {
    let chunks = Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(content);
    (chunks[0], chunks[1])
}

/// Center the create form in the content area, clamped to a readable width.
pub fn form_area(content: Rect) -> Rect {
    let width = content.width.min(72);
    let x = content.x + (content.width - width) / 2;
    Rect::new(x, content.y, width, content.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_rows() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.navbar.height, 3);
        assert_eq!(layout.footer.height, 3);
        assert_eq!(layout.content.height, 18);
        assert_eq!(layout.content.y, 3);
        assert_eq!(
            layout.navbar.height + layout.content.height + layout.footer.height,
            area.height
        );
    }

    #[test]
    fn test_browse_panes_split() {
        let content = Rect::new(0, 3, 90, 18);
        let (list, detail) = browse_panes(content);

        assert_eq!(list.width, 30);
        assert_eq!(detail.width, 60);
        assert_eq!(list.height, 18);
        assert_eq!(detail.x, list.x + list.width);
    }

    #[test]
    fn test_form_area_is_centered_and_clamped() {
        let content = Rect::new(0, 3, 100, 18);
        let form = form_area(content);
        assert_eq!(form.width, 72);
        assert_eq!(form.x, 14);

        let narrow = Rect::new(0, 3, 50, 18);
        let form = form_area(narrow);
        assert_eq!(form.width, 50);
        assert_eq!(form.x, 0);
    }
}
