mod confirm;
mod editor;
mod navigate;
mod prompt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, EditorField, Mode};

use confirm::handle_confirm;
use editor::{handle_assign, handle_editor};
use navigate::handle_navigate;
use prompt::handle_prompt;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;
    let key = normalize_key(key);

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows everything but its close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match app.mode.clone() {
        Mode::Navigate => handle_navigate(app, key),
        Mode::AddCategory | Mode::AddTodo | Mode::Modal => handle_prompt(app, key),
        Mode::Edit => handle_editor(app, key),
        Mode::Assign => handle_assign(app, key),
        Mode::ConfirmDelete(id) => handle_confirm(app, key, id),
    }
}

/// Insert pasted text into whichever line input has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::AddCategory | Mode::AddTodo | Mode::Modal => app.input.insert_str(text),
        Mode::Edit => {
            if let Some(form) = &mut app.editor {
                match form.field {
                    EditorField::Title => form.title.insert_str(text),
                    EditorField::Description => form.description.insert_str(text),
                    EditorField::Done | EditorField::Category => {}
                }
            }
        }
        _ => {}
    }
}

/// Uppercase letters always carry SHIFT, whatever the terminal reported.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && c.is_ascii_uppercase()
    {
        key.modifiers.insert(KeyModifiers::SHIFT);
    }
    key
}
