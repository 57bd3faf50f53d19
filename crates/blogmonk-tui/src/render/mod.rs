//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use blogmonk_app::state::{AppState, UiMode};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{BlogDetail, BlogList, CreateForm, Footer, Navbar};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let notice = state.notice.as_ref().map(|n| n.text.as_str());
    frame.render_widget(Navbar::new(state.ui_mode).with_notice(notice), areas.navbar);

    match state.ui_mode {
        UiMode::Browse => {
            let (list_area, detail_area) = layout::browse_panes(areas.content);
            frame.render_widget(
                BlogList::new(state.store.list(), state.cursor, state.selected)
                    .skeleton_rows(state.settings.ui.skeleton_rows),
                list_area,
            );
            frame.render_widget(
                BlogDetail::new(state.store.detail(), state.selected.is_some())
                    .scroll(state.detail_scroll),
                detail_area,
            );
        }
        UiMode::Create => {
            frame.render_widget(
                CreateForm::new(&state.draft),
                layout::form_area(areas.content),
            );
        }
    }

    frame.render_widget(Footer, areas.footer);
}
