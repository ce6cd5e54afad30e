use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Todo;
use crate::tui::app::{App, Mode, Pane};
use crate::util::unicode;

use super::{pane_block, scroll_offset};

/// Render the todo pane: add-todo line, then the selected category's todos
pub fn render_todo_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = match app.mode {
        Mode::Navigate => app.focus == Pane::Todos,
        Mode::AddTodo => true,
        _ => false,
    };
    let title = match app
        .state()
        .selected_category
        .as_ref()
        .and_then(|id| app.category_path(id))
    {
        Some(path) => format!(" Todos \u{00B7} {} ", path),
        None => " Todos ".to_string(),
    };
    let block = pane_block(app, title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    // Add-todo line
    let has_selection = app.state().selected_category.is_some();
    if app.mode == Mode::AddTodo {
        let prompt = "+ ";
        lines.push(Line::from(vec![
            Span::styled(prompt, Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(
                app.input.text().to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ]));
        let x = inner.x + (prompt.len() + app.input.cursor_col()) as u16;
        if x < inner.x + inner.width && inner.height > 0 {
            frame.set_cursor_position((x, inner.y));
        }
    } else if has_selection {
        lines.push(Line::from(Span::styled("+ add todo (a)", dim_style)));
    } else {
        lines.push(Line::from(Span::styled(
            "  select a category to add todos",
            dim_style,
        )));
    }

    let todos = app.state().selected_todos();
    if todos.is_empty() {
        if has_selection {
            lines.push(Line::from(Span::styled("  No todos", dim_style)));
        }
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
        return;
    }

    let height = (inner.height as usize).saturating_sub(lines.len());
    let scroll = scroll_offset(app.todo_cursor, height);
    let end = todos.len().min(scroll + height);
    for (i, todo) in todos[scroll..end].iter().enumerate() {
        let is_cursor = focused && scroll + i == app.todo_cursor;
        lines.push(render_todo_line(app, todo, is_cursor, width));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

fn render_todo_line<'a>(app: &'a App, todo: &Todo, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = app.theme.background;
    let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

    let mut spans: Vec<Span> = Vec::new();
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default().fg(app.theme.selection_border).bg(row_bg),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));
    }

    let checkbox = if todo.is_done { "[x] " } else { "[ ] " };
    spans.push(Span::styled(
        checkbox,
        Style::default()
            .fg(app.theme.done_color(todo.is_done))
            .bg(row_bg),
    ));

    let title_style = if todo.is_done {
        Style::default()
            .fg(app.theme.dim)
            .bg(row_bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(row_bg)
    };

    // Description marker after the title
    let note = if todo.description.is_some() { " \u{2261}" } else { "" }; // ≡
    let room = width.saturating_sub(5 + unicode::display_width(note));
    spans.push(Span::styled(
        unicode::truncate_to_width(&todo.title, room),
        title_style,
    ));
    if !note.is_empty() {
        spans.push(Span::styled(note, Style::default().fg(app.theme.dim).bg(row_bg)));
    }

    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    if is_cursor && used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(row_bg),
        ));
    }
    Line::from(spans)
}
