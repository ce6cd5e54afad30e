use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::CategoryId;
use crate::state::Action;
use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent, id: CategoryId) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            app.mode = Mode::Navigate;
            let title = app.state().find_category(&id).map(|c| c.title.clone());
            if app.dispatch(Action::DeleteCategory { id }).is_applied()
                && let Some(title) = title
            {
                app.status = Some(format!("deleted \"{}\"", title));
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
