use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(70, 90, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let styles = (header_style, key_style, desc_style);
    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    add_section(
        &mut lines,
        styles,
        " Categories",
        &[
            (" \u{2191}\u{2193}/jk", "Move cursor"),
            (" \u{2192}/l  \u{2190}/h", "Expand / collapse"),
            (" Enter/Space", "Select category"),
            (" a", "Add category"),
            (" A", "Add subcategory"),
            (" r", "Rename"),
            (" d", "Delete (asks first)"),
        ],
    );
    add_section(
        &mut lines,
        styles,
        " Todos",
        &[
            (" a", "Add todo to selected category"),
            (" Space/x", "Toggle done"),
            (" Enter/e", "Open in editor"),
        ],
    );
    add_section(
        &mut lines,
        styles,
        " Editor",
        &[
            (" Tab/Shift+Tab", "Next / previous field"),
            (" Enter", "Change category (on Category)"),
            (" Ctrl+S", "Save"),
            (" Esc", "Cancel"),
        ],
    );
    add_section(
        &mut lines,
        styles,
        " Global",
        &[
            (" Tab", "Switch pane"),
            (" u / Z", "Undo / redo"),
            (" ?", "Toggle this help"),
            (" q", "Quit"),
        ],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_section(
    lines: &mut Vec<Line<'static>>,
    (header_style, key_style, desc_style): (Style, Style, Style),
    title: &'static str,
    bindings: &[(&'static str, &'static str)],
) {
    lines.push(Line::from(Span::styled(title, header_style)));
    for &(key, desc) in bindings {
        add_binding(lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
