pub mod category_list;
pub mod category_modal;
pub mod confirm_popup;
pub mod help_overlay;
pub mod nav_bar;
pub mod status_row;
pub mod todo_editor;
pub mod todo_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use super::app::{App, Mode};

/// Draw the full screen, overlays last
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: nav bar (2 rows) | body | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // panes
            Constraint::Length(1), // status row
        ])
        .split(area);

    nav_bar::render_nav_bar(frame, app, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    category_list::render_category_list(frame, app, panes[0]);
    if app.editor.is_some() && app.state().is_editing() {
        todo_editor::render_todo_editor(frame, app, panes[1]);
    } else {
        todo_list::render_todo_list(frame, app, panes[1]);
    }

    status_row::render_status_row(frame, app, chunks[2]);

    // Overlays
    match &app.mode {
        Mode::Modal => category_modal::render_category_modal(frame, app, area),
        Mode::ConfirmDelete(id) => confirm_popup::render_confirm_popup(frame, app, id, area),
        _ => {}
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Bordered pane with a title; the border lights up when focused
pub(super) fn pane_block<'a>(app: &App, title: String, focused: bool) -> Block<'a> {
    let border = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(app.theme.text_bright).bg(app.theme.background))
        .border_style(Style::default().fg(border).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background))
}

/// First row to draw so that `cursor` stays within `height` rows
pub(super) fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor.saturating_sub(height - 1)
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
