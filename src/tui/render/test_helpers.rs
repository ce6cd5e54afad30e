use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Category, DeletePolicy, SequentialIds, Todo, TodoMap, UiConfig};
use crate::state::{Action, AppState, Session};
use crate::tui::app::{App, EditorForm, Mode};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen at the default test size
pub fn render_app(app: &App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| super::render(frame, app))
}

fn todo(id: &str, category: &str, title: &str) -> Todo {
    Todo::new(id.into(), category.into(), title.into())
}

/// Home (Garden, collapsed) and Work, with a few todos and nothing selected.
pub fn sample_state() -> AppState {
    let mut home = Category::new("home".into(), "Home".into(), None);
    home.children
        .push(Category::new("garden".into(), "Garden".into(), Some("home".into())));
    let work = Category::new("work".into(), "Work".into(), None);

    let mut todos = TodoMap::new();
    todos.insert(
        "home".into(),
        vec![
            todo("dishes", "home", "Dishes"),
            todo("sweep", "home", "Sweep"),
        ],
    );
    todos.insert("garden".into(), vec![todo("weed", "garden", "Weed")]);
    todos.insert("work".into(), vec![todo("ship", "work", "Ship release")]);

    AppState {
        categories: vec![home, work],
        todos,
        ..AppState::default()
    }
}

fn app_with(state: AppState) -> App {
    let session = Session::with_state(
        state,
        Box::new(SequentialIds::new()),
        DeletePolicy::DropEntry,
    );
    App::new(session, &UiConfig::default())
}

pub fn sample_app() -> App {
    app_with(sample_state())
}

pub fn empty_app() -> App {
    app_with(AppState::new())
}

/// Select Home and open its first todo in the editor.
pub fn select_and_edit_first(app: &mut App) {
    app.dispatch(Action::SelectCategory {
        id: "home".into(),
    });
    app.dispatch(Action::BeginEdit {
        id: "dishes".into(),
    });
    app.editor = app.state().edit_todo.as_ref().map(EditorForm::from_todo);
    app.mode = Mode::Edit;
}
