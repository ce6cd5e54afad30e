use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{Action, Modal};
use crate::tui::app::{App, Mode, Pane};

/// Line input shared by add-category, add-todo and the category dialog
pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit(app),
        KeyCode::Esc => cancel(app),
        _ => {
            app.input.handle_key(key);
        }
    }
}

fn submit(app: &mut App) {
    let title = app.input.text().to_string();
    let adding_under = match &app.state().modal {
        Modal::AddChild { parent } => Some(parent.clone()),
        _ => None,
    };
    let mode = app.mode.clone();
    let action = match mode {
        Mode::AddCategory => Action::AddCategory {
            title: title.clone(),
            parent: None,
        },
        Mode::AddTodo => Action::AddTodo {
            title: title.clone(),
        },
        Mode::Modal => Action::ModalSave {
            title: title.clone(),
        },
        _ => return,
    };

    // Rejected titles keep the prompt open with a hint
    if !app.dispatch(action).is_applied() {
        return;
    }
    app.input.clear();
    match mode {
        Mode::AddCategory => app.category_cursor = 0,
        Mode::AddTodo => {
            app.todo_cursor = 0;
            app.focus = Pane::Todos;
        }
        Mode::Modal => {
            if let Some(parent) = adding_under
                && let Some(name) = app.state().find_category(&parent).map(|c| c.title.clone())
            {
                app.status = Some(format!("added \"{}\" under {}", title.trim(), name));
            }
        }
        _ => {}
    }
    app.mode = Mode::Navigate;
}

fn cancel(app: &mut App) {
    if app.mode == Mode::Modal {
        app.dispatch(Action::ModalClose);
    }
    app.input.clear();
    app.mode = Mode::Navigate;
}
