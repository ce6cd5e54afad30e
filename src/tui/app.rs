use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Category, CategoryId, Config, Todo, UiConfig};
use crate::ops::{Outcome, Rejection, category_ops};
use crate::state::{Action, AppState, Session};

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing the title of a new root category
    AddCategory,
    /// Typing the title of a new todo in the selected category
    AddTodo,
    /// Todo editor form is open
    Edit,
    /// Picking a new category for the todo in the editor
    Assign,
    /// Category dialog (rename or add child) is open
    Modal,
    /// Waiting for y/n before deleting a category
    ConfirmDelete(CategoryId),
}

/// Which pane has keyboard focus in Navigate mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Categories,
    Todos,
}

/// A category row in the visible tree. Children of collapsed categories are
/// not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatCategory {
    pub id: CategoryId,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_last_sibling: bool,
    /// Whether each ancestor is the last of its siblings (for tree guides)
    pub ancestor_last: Vec<bool>,
}

/// Field focus inside the todo editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Done,
    Description,
    Category,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::Title => EditorField::Done,
            EditorField::Done => EditorField::Description,
            EditorField::Description => EditorField::Category,
            EditorField::Category => EditorField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditorField::Title => EditorField::Category,
            EditorField::Done => EditorField::Title,
            EditorField::Description => EditorField::Done,
            EditorField::Category => EditorField::Description,
        }
    }
}

/// Unsaved values of the todo editor
#[derive(Debug, Clone)]
pub struct EditorForm {
    pub title: TextInput,
    pub is_done: bool,
    pub description: TextInput,
    pub field: EditorField,
}

impl EditorForm {
    pub fn from_todo(todo: &Todo) -> Self {
        EditorForm {
            title: TextInput::with_text(&todo.title),
            is_done: todo.is_done,
            description: TextInput::with_text(todo.description.as_deref().unwrap_or("")),
            field: EditorField::Title,
        }
    }

    /// The action that saves this form
    pub fn save_action(&self) -> Action {
        Action::SaveEdit {
            title: self.title.text().to_string(),
            is_done: self.is_done,
            description: Some(self.description.text().to_string()),
        }
    }
}

/// Main application state
pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub focus: Pane,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into `visible_categories()`
    pub category_cursor: usize,
    /// Cursor index into the selected category's todos
    pub todo_cursor: usize,
    /// Shared line input for add-category, add-todo and the category dialog
    pub input: TextInput,
    pub editor: Option<EditorForm>,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// One-line message in the status row, cleared on the next key
    pub status: Option<String>,
}

impl App {
    pub fn new(session: Session, ui: &UiConfig) -> Self {
        App {
            session,
            mode: Mode::Navigate,
            focus: Pane::Categories,
            should_quit: false,
            theme: Theme::from_config(ui),
            category_cursor: 0,
            todo_cursor: 0,
            input: TextInput::new(),
            editor: None,
            show_help: false,
            show_key_hints: ui.show_key_hints,
            status: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.session.state()
    }

    /// Run an action and reconcile the UI with the new state. Rejections the
    /// user can act on are shown in the status row.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.session.dispatch(action);
        if let Outcome::Rejected(reason) = outcome {
            self.status = Some(rejection_hint(reason).to_string());
        }
        self.sync();
        outcome
    }

    pub fn undo(&mut self) {
        if self.session.undo() {
            self.status = Some("undone".into());
        } else {
            self.status = Some("nothing to undo".into());
        }
        self.sync();
    }

    pub fn redo(&mut self) {
        if self.session.redo() {
            self.status = Some("redone".into());
        } else {
            self.status = Some("nothing to redo".into());
        }
        self.sync();
    }

    /// Leave modes whose backing state is gone and clamp cursors.
    fn sync(&mut self) {
        let editing = self.state().is_editing();
        if matches!(self.mode, Mode::Edit | Mode::Assign) && !editing {
            self.mode = Mode::Navigate;
        }
        if !editing {
            self.editor = None;
        }
        if self.mode == Mode::Modal && !self.state().show_modal() {
            self.mode = Mode::Navigate;
        }
        if let Mode::ConfirmDelete(id) = &self.mode
            && self.state().find_category(id).is_none()
        {
            self.mode = Mode::Navigate;
        }

        let visible = self.visible_categories();
        self.category_cursor = self.category_cursor.min(visible.len().saturating_sub(1));
        let todo_count = self.state().selected_todos().len();
        self.todo_cursor = self.todo_cursor.min(todo_count.saturating_sub(1));
    }

    /// Put the category cursor on `id` if it is visible.
    pub fn move_cursor_to(&mut self, id: &CategoryId) {
        if let Some(pos) = self.visible_categories().iter().position(|f| &f.id == id) {
            self.category_cursor = pos;
        }
    }

    /// Flattened rows of the category tree as currently expanded
    pub fn visible_categories(&self) -> Vec<FlatCategory> {
        let mut rows = Vec::new();
        flatten_categories(&self.state().categories, 0, &[], &mut rows);
        rows
    }

    pub fn cursor_row(&self) -> Option<FlatCategory> {
        self.visible_categories().into_iter().nth(self.category_cursor)
    }

    pub fn cursor_category(&self) -> Option<&Category> {
        let row = self.cursor_row()?;
        category_ops::find_category(&self.state().categories, &row.id)
    }

    pub fn cursor_todo(&self) -> Option<&Todo> {
        self.state().selected_todos().get(self.todo_cursor)
    }

    /// "Home / Garden" style path of a category
    pub fn category_path(&self, id: &CategoryId) -> Option<String> {
        category_ops::category_path(&self.state().categories, id).map(|p| p.join(" / "))
    }
}

fn rejection_hint(reason: Rejection) -> &'static str {
    match reason {
        Rejection::EmptyTitle => "title can't be empty",
        Rejection::NoCategorySelected => "select a category first",
        Rejection::NotEditing => "no todo open in the editor",
        Rejection::EditInProgress => "finish editing first (Ctrl+S save, Esc cancel)",
        Rejection::ModalClosed => "category dialog is closed",
    }
}

fn flatten_categories(
    categories: &[Category],
    depth: usize,
    ancestor_last: &[bool],
    rows: &mut Vec<FlatCategory>,
) {
    let count = categories.len();
    for (i, category) in categories.iter().enumerate() {
        let is_last = i + 1 == count;
        let has_children = category.has_children();
        let is_expanded = has_children && category.is_expanded;
        rows.push(FlatCategory {
            id: category.id.clone(),
            depth,
            has_children,
            is_expanded,
            is_last_sibling: is_last,
            ancestor_last: ancestor_last.to_vec(),
        });
        if is_expanded {
            let mut next = ancestor_last.to_vec();
            next.push(is_last);
            flatten_categories(&category.children, depth + 1, &next, rows);
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::from_config(&config.behavior);
    let mut app = App::new(session, &config.ui);
    info!(
        delete_policy = ?config.behavior.on_category_delete,
        ids = ?config.behavior.ids,
        "session started"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
