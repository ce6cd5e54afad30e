use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Action;
use crate::tui::app::{App, EditorField, Mode, Pane};

use super::navigate::{collapse_or_ascend, expand_or_descend, move_category_cursor};

pub(super) fn handle_editor(app: &mut App, key: KeyEvent) {
    let Some(field) = app.editor.as_ref().map(|f| f.field) else {
        app.mode = Mode::Navigate;
        return;
    };
    match (key.modifiers, key.code) {
        (m, KeyCode::Char('s')) if m.contains(KeyModifiers::CONTROL) => save(app),
        (_, KeyCode::Esc) => cancel(app),
        (_, KeyCode::Tab | KeyCode::Down) => set_field(app, field.next()),
        (_, KeyCode::BackTab | KeyCode::Up) => set_field(app, field.prev()),
        _ => match field {
            EditorField::Title | EditorField::Description => {
                if key.code == KeyCode::Enter {
                    save(app);
                } else if let Some(form) = &mut app.editor {
                    let input = if field == EditorField::Title {
                        &mut form.title
                    } else {
                        &mut form.description
                    };
                    input.handle_key(key);
                }
            }
            EditorField::Done => match key.code {
                KeyCode::Char(' ') | KeyCode::Char('x') => {
                    if let Some(form) = &mut app.editor {
                        form.is_done = !form.is_done;
                    }
                }
                KeyCode::Enter => save(app),
                _ => {}
            },
            EditorField::Category => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    start_assign(app);
                }
            }
        },
    }
}

fn set_field(app: &mut App, field: EditorField) {
    if let Some(form) = &mut app.editor {
        form.field = field;
    }
}

fn save(app: &mut App) {
    let Some(action) = app.editor.as_ref().map(|f| f.save_action()) else {
        return;
    };
    if app.dispatch(action).is_applied() {
        app.status = Some("saved".into());
        app.todo_cursor = 0;
        app.focus = Pane::Todos;
        if let Some(id) = app.state().selected_category.clone() {
            app.move_cursor_to(&id);
        }
    }
}

fn cancel(app: &mut App) {
    app.dispatch(Action::CancelEdit);
    if let Some(id) = app.state().selected_category.clone() {
        app.move_cursor_to(&id);
    }
}

fn start_assign(app: &mut App) {
    let Some(current) = app.state().edit_todo.as_ref().map(|t| t.category.clone()) else {
        return;
    };
    app.mode = Mode::Assign;
    app.focus = Pane::Categories;
    app.move_cursor_to(&current);
}

/// Picking a category for the todo in the editor
pub(super) fn handle_assign(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_category_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_category_cursor(app, -1),
        KeyCode::Char('l') | KeyCode::Right => expand_or_descend(app),
        KeyCode::Char('h') | KeyCode::Left => collapse_or_ascend(app),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(row) = app.cursor_row() {
                app.dispatch(Action::AssignCategory { id: row.id });
            }
            app.mode = Mode::Edit;
        }
        KeyCode::Esc => app.mode = Mode::Edit,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_keys::*;
    use super::*;
    use crate::model::CategoryId;
    use crate::tui::render::test_helpers::sample_app;
    use pretty_assertions::assert_eq;

    /// Select Home and open "Dishes" in the editor
    fn editing_app() -> App {
        let mut app = sample_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Edit);
        app
    }

    fn todos_in(app: &App, category: &str) -> Vec<String> {
        app.state()
            .todos_for(&CategoryId::from(category))
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    #[test]
    fn edit_title_and_save() {
        let mut app = editing_app();
        type_str(&mut app, " twice");
        ctrl(&mut app, 's');

        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.state().is_editing());
        assert_eq!(todos_in(&app, "home"), vec!["Dishes twice", "Sweep"]);
        assert_eq!(app.status.as_deref(), Some("saved"));
    }

    #[test]
    fn toggle_done_and_description() {
        let mut app = editing_app();
        press(&mut app, KeyCode::Tab);
        ch(&mut app, ' ');
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "after dinner");
        press(&mut app, KeyCode::Enter);

        let saved = &app.state().todos_for(&"home".into())[0];
        assert!(saved.is_done);
        assert_eq!(saved.description.as_deref(), Some("after dinner"));
    }

    #[test]
    fn empty_title_is_refused() {
        let mut app = editing_app();
        ctrl(&mut app, 'u');
        ctrl(&mut app, 's');
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.status.as_deref(), Some("title can't be empty"));
        assert_eq!(todos_in(&app, "home"), vec!["Dishes", "Sweep"]);
    }

    #[test]
    fn esc_discards_changes() {
        let mut app = editing_app();
        type_str(&mut app, "!!!");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(todos_in(&app, "home"), vec!["Dishes", "Sweep"]);
    }

    #[test]
    fn reassign_and_save_moves_todo() {
        let mut app = editing_app();
        press(&mut app, KeyCode::BackTab); // Category field
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Assign);
        assert_eq!(app.cursor_category().unwrap().title, "Home");

        ch(&mut app, 'j'); // Work
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.state().selected_category, Some("work".into()));

        ctrl(&mut app, 's');
        assert_eq!(todos_in(&app, "home"), vec!["Sweep"]);
        assert_eq!(todos_in(&app, "work"), vec!["Dishes", "Ship release"]);
        assert_eq!(app.cursor_category().unwrap().title, "Work");
    }

    #[test]
    fn reassign_then_cancel_restores_selection() {
        let mut app = editing_app();
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        ch(&mut app, 'j');
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.state().selected_category, Some("home".into()));
        assert_eq!(todos_in(&app, "home"), vec!["Dishes", "Sweep"]);
        assert_eq!(app.cursor_category().unwrap().title, "Home");
    }

    #[test]
    fn esc_in_assign_returns_to_form() {
        let mut app = editing_app();
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.state().is_editing());
    }
}
