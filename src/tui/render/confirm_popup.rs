use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::{CategoryId, DeletePolicy};
use crate::state::AppState;
use crate::tui::app::App;

use super::centered_rect_fixed;

/// Render the y/n prompt shown before a category is deleted
pub fn render_confirm_popup(frame: &mut Frame, app: &App, id: &CategoryId, area: Rect) {
    let Some((question, consequence)) = delete_summary(app.state(), id, app.session.delete_policy())
    else {
        return;
    };

    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let highlight = app.theme.highlight;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let key_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Delete category", header_style)),
        Line::from(""),
    ];
    for s in wrap_text(" ", &question, inner_w) {
        lines.push(Line::from(Span::styled(s, text_style)));
    }
    for s in wrap_text(" ", &consequence, inner_w) {
        lines.push(Line::from(Span::styled(s, text_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" y", key_style),
        Span::styled(" delete   ", text_style),
        Span::styled("n", key_style),
        Span::styled(" cancel", text_style),
    ]));

    // Height from content + 2 for borders
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay_area,
    );
}

/// What deleting `id` will do, as (question, consequence) sentences
pub fn delete_summary(
    state: &AppState,
    id: &CategoryId,
    policy: DeletePolicy,
) -> Option<(String, String)> {
    let category = state.find_category(id)?;
    let question = match category.descendant_count() {
        0 => format!("Delete \"{}\"?", category.title),
        1 => format!("Delete \"{}\" and its subcategory?", category.title),
        n => format!("Delete \"{}\" and its {} subcategories?", category.title, n),
    };
    let parent = category
        .parent
        .as_ref()
        .and_then(|p| state.find_category(p));
    let consequence = match (policy, parent) {
        (DeletePolicy::Reparent, Some(parent)) => {
            format!("Its todos move to \"{}\".", parent.title)
        }
        (DeletePolicy::DropEntry, _) => "Its todos are removed.".to_string(),
        _ => "All todos in it are removed.".to_string(),
    };
    Some((question, consequence))
}

/// Word-wrap `text` into lines of at most `max_width` characters.
/// Every line (including the first) is prefixed with `indent`.
fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = indent.len();
    let mut lines = Vec::new();
    let mut current = indent.to_string();

    for word in text.split_whitespace() {
        let space = if current.len() == indent_len { 0 } else { 1 };
        if current.len() + space + word.len() > max_width && current.len() > indent_len {
            lines.push(current);
            current = indent.to_string();
        }
        if current.len() > indent_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    if current.len() > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}
