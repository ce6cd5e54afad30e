use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Action;
use crate::tui::app::{App, EditorForm, Mode, Pane};
use crate::tui::text_input::TextInput;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (KeyModifiers::NONE, KeyCode::Char('?')) => app.show_help = true,
        (_, KeyCode::Tab | KeyCode::BackTab) => {
            app.focus = match app.focus {
                Pane::Categories => Pane::Todos,
                Pane::Todos => Pane::Categories,
            };
        }

        // Redo: Z or Ctrl+Y (checked before undo)
        (m, KeyCode::Char('y')) if m.contains(KeyModifiers::CONTROL) => app.redo(),
        (KeyModifiers::SHIFT, KeyCode::Char('Z')) => app.redo(),
        // Undo: u, z or Ctrl+Z
        (KeyModifiers::NONE, KeyCode::Char('u') | KeyCode::Char('z')) => app.undo(),
        (m, KeyCode::Char('z')) if m.contains(KeyModifiers::CONTROL) => app.undo(),

        _ => match app.focus {
            Pane::Categories => handle_category_key(app, key),
            Pane::Todos => handle_todo_key(app, key),
        },
    }
}

// ---------------------------------------------------------------------------
// Category pane
// ---------------------------------------------------------------------------

fn handle_category_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('j') | KeyCode::Down) => move_category_cursor(app, 1),
        (_, KeyCode::Char('k') | KeyCode::Up) => move_category_cursor(app, -1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.category_cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.category_cursor = app.visible_categories().len().saturating_sub(1);
        }
        (_, KeyCode::Char('l') | KeyCode::Right) => expand_or_descend(app),
        (_, KeyCode::Char('h') | KeyCode::Left) => collapse_or_ascend(app),

        // Select; Enter also moves focus to the todos
        (_, KeyCode::Char(' ')) => {
            select_cursor_category(app);
        }
        (_, KeyCode::Enter) => {
            if select_cursor_category(app) {
                app.focus = Pane::Todos;
            }
        }

        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.input.clear();
            app.mode = Mode::AddCategory;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('A')) => {
            let Some(id) = app.cursor_row().map(|r| r.id) else {
                return;
            };
            if app.dispatch(Action::OpenAddChildModal { id }).is_applied() {
                app.input.clear();
                app.mode = Mode::Modal;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('r') | KeyCode::Char('e')) => {
            let Some((id, title)) = app.cursor_category().map(|c| (c.id.clone(), c.title.clone()))
            else {
                return;
            };
            if app.dispatch(Action::OpenRenameModal { id }).is_applied() {
                app.input = TextInput::with_text(&title);
                app.mode = Mode::Modal;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            if let Some(row) = app.cursor_row() {
                app.mode = Mode::ConfirmDelete(row.id);
            }
        }
        _ => {}
    }
}

fn select_cursor_category(app: &mut App) -> bool {
    let Some(row) = app.cursor_row() else {
        return false;
    };
    let applied = app.dispatch(Action::SelectCategory { id: row.id }).is_applied();
    if applied {
        app.todo_cursor = 0;
    }
    applied
}

pub(super) fn move_category_cursor(app: &mut App, delta: isize) {
    let count = app.visible_categories().len();
    if count == 0 {
        return;
    }
    let next = app.category_cursor.saturating_add_signed(delta);
    app.category_cursor = next.min(count - 1);
}

/// Expand a collapsed parent, or step into the first child of an expanded one.
pub(super) fn expand_or_descend(app: &mut App) {
    let Some(row) = app.cursor_row() else {
        return;
    };
    if !row.has_children {
        return;
    }
    if row.is_expanded {
        move_category_cursor(app, 1);
    } else {
        app.dispatch(Action::SetExpanded {
            id: row.id,
            is_expanded: true,
        });
    }
}

/// Collapse an expanded category, or jump to the parent row.
pub(super) fn collapse_or_ascend(app: &mut App) {
    let Some(row) = app.cursor_row() else {
        return;
    };
    if row.is_expanded {
        app.dispatch(Action::SetExpanded {
            id: row.id,
            is_expanded: false,
        });
        return;
    }
    let parent = app
        .state()
        .find_category(&row.id)
        .and_then(|c| c.parent.clone());
    if let Some(parent) = parent {
        app.move_cursor_to(&parent);
    }
}

// ---------------------------------------------------------------------------
// Todo pane
// ---------------------------------------------------------------------------

fn handle_todo_key(app: &mut App, key: KeyEvent) {
    let count = app.state().selected_todos().len();
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('j') | KeyCode::Down) => {
            if count > 0 {
                app.todo_cursor = (app.todo_cursor + 1).min(count - 1);
            }
        }
        (_, KeyCode::Char('k') | KeyCode::Up) => {
            app.todo_cursor = app.todo_cursor.saturating_sub(1);
        }
        (_, KeyCode::Char('g') | KeyCode::Home) => app.todo_cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.todo_cursor = count.saturating_sub(1);
        }
        (_, KeyCode::Char('h') | KeyCode::Left) => app.focus = Pane::Categories,

        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            let Some((id, is_done)) = app.cursor_todo().map(|t| (t.id.clone(), t.is_done)) else {
                return;
            };
            app.dispatch(Action::SetChecked {
                id,
                is_done: !is_done,
            });
        }
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('e')) => {
            let Some(id) = app.cursor_todo().map(|t| t.id.clone()) else {
                return;
            };
            if app.dispatch(Action::BeginEdit { id }).is_applied() {
                app.editor = app.state().edit_todo.as_ref().map(EditorForm::from_todo);
                app.mode = Mode::Edit;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            if app.state().selected_category.is_none() {
                app.status = Some("select a category first".into());
                return;
            }
            app.input.clear();
            app.mode = Mode::AddTodo;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_keys::*;
    use super::*;
    use crate::tui::render::test_helpers::{empty_app, sample_app};
    use pretty_assertions::assert_eq;

    fn cursor_title(app: &App) -> String {
        app.cursor_category().unwrap().title.clone()
    }

    #[test]
    fn jk_moves_within_visible_rows() {
        let mut app = sample_app();
        // Home (collapsed), Work
        assert_eq!(cursor_title(&app), "Home");
        ch(&mut app, 'j');
        assert_eq!(cursor_title(&app), "Work");
        ch(&mut app, 'j');
        assert_eq!(cursor_title(&app), "Work");
        ch(&mut app, 'k');
        ch(&mut app, 'k');
        assert_eq!(cursor_title(&app), "Home");
    }

    #[test]
    fn l_expands_then_descends_and_h_goes_back() {
        let mut app = sample_app();
        ch(&mut app, 'l');
        assert!(app.state().find_category(&"home".into()).unwrap().is_expanded);
        assert_eq!(cursor_title(&app), "Home");

        ch(&mut app, 'l');
        assert_eq!(cursor_title(&app), "Garden");

        ch(&mut app, 'h');
        assert_eq!(cursor_title(&app), "Home");
        ch(&mut app, 'h');
        assert!(!app.state().find_category(&"home".into()).unwrap().is_expanded);
    }

    #[test]
    fn enter_selects_and_focuses_todos() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().selected_category, Some("home".into()));
        assert_eq!(app.focus, Pane::Todos);
    }

    #[test]
    fn add_root_category_mode() {
        let mut app = empty_app();
        ch(&mut app, 'a');
        assert_eq!(app.mode, Mode::AddCategory);
    }

    #[test]
    fn shift_a_opens_add_child_dialog() {
        let mut app = sample_app();
        ch(&mut app, 'A');
        assert_eq!(app.mode, Mode::Modal);
        assert_eq!(
            app.state().modal_parent_category().map(|c| c.title.as_str()),
            Some("Home")
        );
    }

    #[test]
    fn r_opens_rename_with_current_title() {
        let mut app = sample_app();
        ch(&mut app, 'r');
        assert_eq!(app.mode, Mode::Modal);
        assert_eq!(app.input.text(), "Home");
        assert_eq!(
            app.state().modal_category().map(|c| c.title.as_str()),
            Some("Home")
        );
    }

    #[test]
    fn d_asks_for_confirmation() {
        let mut app = sample_app();
        ch(&mut app, 'd');
        assert_eq!(app.mode, Mode::ConfirmDelete("home".into()));
        assert_eq!(app.state().categories.len(), 2);
    }

    #[test]
    fn keys_on_empty_tree_do_nothing() {
        let mut app = empty_app();
        for c in ['j', 'k', 'l', 'h', ' ', 'A', 'r', 'd'] {
            ch(&mut app, c);
        }
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.state().categories.is_empty());
    }

    #[test]
    fn space_toggles_todo() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Enter);
        ch(&mut app, ' ');
        assert!(app.state().selected_todos()[0].is_done);
        ch(&mut app, 'x');
        assert!(!app.state().selected_todos()[0].is_done);
    }

    #[test]
    fn enter_on_todo_opens_editor() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Enter);
        ch(&mut app, 'j');
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Edit);
        let form = app.editor.as_ref().unwrap();
        assert_eq!(form.title.text(), "Sweep");
        assert_eq!(
            app.state().edit_todo.as_ref().map(|t| t.title.as_str()),
            Some("Sweep")
        );
    }

    #[test]
    fn add_todo_needs_a_selection() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Tab);
        ch(&mut app, 'a');
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.status.as_deref(), Some("select a category first"));
    }

    #[test]
    fn undo_and_redo_keys() {
        let mut app = sample_app();
        let before = app.state().clone();
        ch(&mut app, 'l');
        ch(&mut app, 'u');
        assert_eq!(app.state().categories, before.categories);
        ch(&mut app, 'Z');
        assert!(app.state().find_category(&"home".into()).unwrap().is_expanded);
    }

    #[test]
    fn q_quits() {
        let mut app = empty_app();
        ch(&mut app, 'q');
        assert!(app.should_quit);
    }
}
