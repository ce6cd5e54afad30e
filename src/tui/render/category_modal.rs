use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::state::Modal;
use crate::tui::app::App;
use crate::util::unicode;

use super::centered_rect_fixed;

/// Render the category dialog (rename or add child) over the panes
pub fn render_category_modal(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let heading = match &state.modal {
        Modal::Closed => return,
        Modal::Rename { .. } => "Rename category".to_string(),
        Modal::AddChild { .. } => match state.modal_parent_category() {
            Some(parent) => format!("Add category under {}", parent.title),
            None => "Add category".to_string(),
        },
    };

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;
    let overlay_area = centered_rect_fixed(popup_w, 6, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let highlight = app.theme.highlight;
    let header_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let prompt = " > ";
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", unicode::truncate_to_width(&heading, inner_w.saturating_sub(1))),
            header_style,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(prompt, Style::default().fg(highlight).bg(bg)),
            Span::styled(
                app.input.text().to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ]),
        Line::from(Span::styled(
            " Enter save  Esc cancel",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay_area);

    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay_area,
    );

    let x = inner.x + (prompt.len() + app.input.cursor_col()) as u16;
    if x < inner.x + inner.width && inner.height > 2 {
        frame.set_cursor_position((x, inner.y + 2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::*;
    use crate::tui::text_input::TextInput;

    /// Render centered in a larger screen, then strip the surrounding blank space
    fn render(app: &App) -> String {
        let out = render_to_string(50, 10, |frame, area| render_category_modal(frame, app, area));
        out.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn add_child_names_the_parent() {
        let mut app = sample_app();
        app.dispatch(Action::OpenAddChildModal { id: "home".into() });
        app.mode = Mode::Modal;
        app.input = TextInput::with_text("Attic");
        insta::assert_snapshot!(render(&app), @r"
        ┌──────────────────────────────────────────┐
        │ Add category under Home                  │
        │                                          │
        │ > Attic                                  │
        │ Enter save  Esc cancel                   │
        └──────────────────────────────────────────┘
        ");
    }

    #[test]
    fn rename_heading() {
        let mut app = sample_app();
        app.dispatch(Action::OpenRenameModal { id: "work".into() });
        app.input = TextInput::with_text("Work");
        let out = render(&app);
        assert!(out.contains("Rename category"));
        assert!(out.contains("> Work"));
    }

    #[test]
    fn closed_modal_draws_nothing() {
        let app = sample_app();
        assert_eq!(render(&app), "");
    }
}
