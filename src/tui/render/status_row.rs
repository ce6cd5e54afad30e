use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Pane};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(message) = &app.status {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    } else if let Some(label) = mode_label(&app.mode) {
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hint = key_hints(app);
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width + 1 < width {
            let padding = width - content_width - hint_width - 1;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn mode_label(mode: &Mode) -> Option<&'static str> {
    match mode {
        Mode::Navigate => None,
        Mode::AddCategory => Some("new category"),
        Mode::AddTodo => Some("new todo"),
        Mode::Edit => Some("editing"),
        Mode::Assign => Some("move to category"),
        Mode::Modal => Some("category"),
        Mode::ConfirmDelete(_) => Some("confirm delete"),
    }
}

fn key_hints(app: &App) -> &'static str {
    match (&app.mode, app.focus) {
        (Mode::Navigate, Pane::Categories) => "a add  A child  r rename  d delete  ? help",
        (Mode::Navigate, Pane::Todos) => "a add  Space done  Enter edit  ? help",
        (Mode::AddCategory | Mode::AddTodo | Mode::Modal, _) => "Enter save  Esc cancel",
        (Mode::Edit, _) => "Tab next field  Ctrl+S save  Esc cancel",
        (Mode::Assign, _) => "Enter assign  Esc back",
        (Mode::ConfirmDelete(_), _) => "y delete  n cancel",
    }
}
