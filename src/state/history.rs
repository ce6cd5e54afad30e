use crate::model::{Category, CategoryId, TodoMap};

use super::AppState;

const HISTORY_LIMIT: usize = 100;

/// The data half of an `AppState`: what undo puts back.
/// Editor and dialog state are never restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    categories: Vec<Category>,
    todos: TodoMap,
    selected_category: Option<CategoryId>,
}

impl Snapshot {
    pub fn capture(state: &AppState) -> Self {
        Snapshot {
            categories: state.categories.clone(),
            todos: state.todos.clone(),
            selected_category: state.selected_category.clone(),
        }
    }

    /// True if `state` holds different categories or todos than this snapshot
    pub fn differs_from(&self, state: &AppState) -> bool {
        self.categories != state.categories || self.todos != state.todos
    }

    fn restore(self, state: &mut AppState) {
        state.categories = self.categories;
        state.todos = self.todos;
        state.selected_category = self.selected_category;
        state.repair_selection();
    }
}

/// Bounded undo/redo stacks of snapshots
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        History {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Record the state as it was before a change. Clears the redo stack.
    pub fn push(&mut self, before: Snapshot) {
        self.undo.push(before);
        if self.undo.len() > HISTORY_LIMIT {
            self.undo.drain(..self.undo.len() - HISTORY_LIMIT);
        }
        self.redo.clear();
    }

    /// Restore the most recent snapshot into `state`. Returns false if there
    /// is nothing to undo.
    pub fn undo(&mut self, state: &mut AppState) -> bool {
        let Some(snapshot) = self.undo.pop() else {
            return false;
        };
        self.redo.push(Snapshot::capture(state));
        snapshot.restore(state);
        true
    }

    pub fn redo(&mut self, state: &mut AppState) -> bool {
        let Some(snapshot) = self.redo.pop() else {
            return false;
        };
        self.undo.push(Snapshot::capture(state));
        snapshot.restore(state);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
