use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditorField, Mode};
use crate::tui::text_input::TextInput;
use crate::util::unicode;

const LABEL_WIDTH: usize = 14;

/// Render the todo editor form in place of the todo list
pub fn render_todo_editor(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == Mode::Edit;
    let block = super::pane_block(app, " Edit todo ".to_string(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (Some(form), Some(todo)) = (&app.editor, &app.state().edit_todo) else {
        return;
    };

    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let width = inner.width as usize;
    let value_width = width.saturating_sub(LABEL_WIDTH);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor: Option<(u16, u16)> = None;

    let text_field = |input: &TextInput, placeholder: &'static str, active: bool| -> Span<'static> {
        if input.is_empty() && !active {
            Span::styled(placeholder, dim_style)
        } else {
            Span::styled(
                unicode::truncate_to_width(input.text(), value_width),
                value_style,
            )
        }
    };

    // Title
    let active = focused && form.field == EditorField::Title;
    lines.push(Line::from(vec![
        label(app, "Title", active),
        text_field(&form.title, "(required)", active),
    ]));
    if active {
        cursor = Some((LABEL_WIDTH as u16 + form.title.cursor_col() as u16, 0));
    }

    // Done
    let active = focused && form.field == EditorField::Done;
    let checkbox = if form.is_done { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        label(app, "Done", active),
        Span::styled(
            checkbox,
            Style::default()
                .fg(app.theme.done_color(form.is_done))
                .bg(bg),
        ),
    ]));

    // Description
    let active = focused && form.field == EditorField::Description;
    lines.push(Line::from(vec![
        label(app, "Description", active),
        text_field(&form.description, "(none)", active),
    ]));
    if active {
        cursor = Some((LABEL_WIDTH as u16 + form.description.cursor_col() as u16, 2));
    }

    // Category
    let active = form.field == EditorField::Category && matches!(app.mode, Mode::Edit | Mode::Assign);
    let path = app
        .category_path(&todo.category)
        .unwrap_or_else(|| todo.category.to_string());
    let mut category_spans = vec![
        label(app, "Category", active),
        Span::styled(unicode::truncate_to_width(&path, value_width), value_style),
    ];
    if todo.previous_category.is_some() {
        category_spans.push(Span::styled(" (moved)", dim_style));
    }
    lines.push(Line::from(category_spans));

    lines.push(Line::from(""));
    let hint = match (app.mode.clone(), form.field) {
        (Mode::Assign, _) => "Pick a category on the left, Enter to assign",
        (_, EditorField::Category) => "Enter change category  Ctrl+S save  Esc cancel",
        (_, EditorField::Done) => "Space toggle  Ctrl+S save  Esc cancel",
        _ => "Tab next field  Ctrl+S save  Esc cancel",
    };
    lines.push(Line::from(Span::styled(
        unicode::truncate_to_width(hint, width),
        dim_style,
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);

    if let Some((x, y)) = cursor
        && x < inner.width
        && y < inner.height
    {
        frame.set_cursor_position((inner.x + x, inner.y + y));
    }
}

fn label<'a>(app: &App, name: &str, active: bool) -> Span<'a> {
    let bg = app.theme.background;
    let marker = if active { "\u{258E}" } else { " " };
    let text = format!("{}{:<width$}", marker, name, width = LABEL_WIDTH - 1);
    let style = if active {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    Span::styled(text, style)
}
