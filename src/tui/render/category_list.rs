use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, FlatCategory, Mode, Pane};
use crate::util::unicode;

use super::{pane_block, scroll_offset};

/// Render the category tree pane
pub fn render_category_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = match app.mode {
        Mode::Navigate => app.focus == Pane::Categories,
        Mode::AddCategory | Mode::Assign => true,
        _ => false,
    };
    let title = if app.mode == Mode::Assign {
        " Move to\u{2026} ".to_string()
    } else {
        " Categories ".to_string()
    };
    let block = pane_block(app, title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.background;
    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    if app.mode == Mode::AddCategory {
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
    }

    let rows = app.visible_categories();
    if rows.is_empty() {
        if app.mode != Mode::AddCategory {
            lines.push(Line::from(Span::styled(
                " No categories",
                Style::default().fg(app.theme.dim).bg(bg),
            )));
            lines.push(Line::from(Span::styled(
                " a  add a category",
                Style::default().fg(app.theme.dim).bg(bg),
            )));
        }
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
        return;
    }

    let height = (inner.height as usize).saturating_sub(lines.len());
    let scroll = scroll_offset(app.category_cursor, height);
    let end = rows.len().min(scroll + height);
    for (i, row) in rows[scroll..end].iter().enumerate() {
        let is_cursor = focused && scroll + i == app.category_cursor;
        lines.push(render_category_line(app, row, is_cursor, width));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

fn render_category_line<'a>(
    app: &'a App,
    row: &FlatCategory,
    is_cursor: bool,
    width: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let is_selected = app.state().selected_category.as_ref() == Some(&row.id);
    let row_bg = if is_cursor || is_selected {
        app.theme.selection_bg
    } else {
        bg
    };
    let dim_style = Style::default().fg(app.theme.dim).bg(row_bg);

    let mut spans: Vec<Span> = Vec::new();

    // Column 0: cursor bar
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default().fg(app.theme.selection_border).bg(row_bg),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));
    }

    // Tree guides: one column per level below the root
    if row.depth > 0 {
        for is_ancestor_last in row.ancestor_last.iter().skip(1) {
            let guide = if *is_ancestor_last { " " } else { "\u{2502}" }; // │
            spans.push(Span::styled(guide, dim_style));
        }
        let tree_char = if row.is_last_sibling {
            "\u{2514}" // └
        } else {
            "\u{251C}" // ├
        };
        spans.push(Span::styled(tree_char, dim_style));
    }

    let expand_char = match (row.has_children, row.is_expanded) {
        (true, true) => "\u{25BC}",  // ▼
        (true, false) => "\u{25B6}", // ▶
        (false, _) => " ",
    };
    spans.push(Span::styled(expand_char, dim_style));
    spans.push(Span::styled(" ", Style::default().bg(row_bg)));

    let Some(category) = app.state().find_category(&row.id) else {
        return Line::from(spans);
    };

    let count = app.state().todos_for(&row.id).len();
    let suffix = if count > 0 {
        format!(" {}", count)
    } else {
        String::new()
    };

    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let room = width.saturating_sub(used + suffix.len());
    let mut title_style = Style::default().fg(app.theme.text).bg(row_bg);
    if is_selected {
        title_style = title_style
            .fg(app.theme.text_bright)
            .add_modifier(Modifier::BOLD);
    }
    spans.push(Span::styled(
        unicode::truncate_to_width(&category.title, room),
        title_style,
    ));
    spans.push(Span::styled(suffix, dim_style));

    // Fill the rest of the row so the highlight spans the pane
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    if row_bg != bg && used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(row_bg),
        ));
    }
    Line::from(spans)
}
