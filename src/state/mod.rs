pub mod action;
pub mod history;
pub mod reducer;
pub mod session;

pub use action::Action;
pub use reducer::reduce;
pub use session::Session;

use serde::{Deserialize, Serialize};

use crate::model::{Category, CategoryId, Todo, TodoMap};
use crate::ops::{category_ops, todo_ops};

/// Category dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Modal {
    #[default]
    Closed,
    /// Editing the title of an existing category
    Rename { category: CategoryId },
    /// Adding a new child under `parent`
    AddChild { parent: CategoryId },
}

/// Everything the UI renders from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub categories: Vec<Category>,
    pub todos: TodoMap,
    pub selected_category: Option<CategoryId>,
    /// The todo open in the editor. While set, the list view is hidden.
    pub edit_todo: Option<Todo>,
    pub modal: Modal,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> Option<&Category> {
        let id = self.selected_category.as_ref()?;
        category_ops::find_category(&self.categories, id)
    }

    /// The todos of the selected category, newest first
    pub fn selected_todos(&self) -> &[Todo] {
        match &self.selected_category {
            Some(id) => todo_ops::todos_in(&self.todos, id),
            None => &[],
        }
    }

    pub fn todos_for(&self, category: &CategoryId) -> &[Todo] {
        todo_ops::todos_in(&self.todos, category)
    }

    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        category_ops::find_category(&self.categories, id)
    }

    pub fn is_editing(&self) -> bool {
        self.edit_todo.is_some()
    }

    pub fn show_modal(&self) -> bool {
        self.modal != Modal::Closed
    }

    /// Category being renamed, if the dialog is in rename mode
    pub fn modal_category(&self) -> Option<&Category> {
        match &self.modal {
            Modal::Rename { category } => self.find_category(category),
            _ => None,
        }
    }

    /// Category receiving a new child, if the dialog is in add mode
    pub fn modal_parent_category(&self) -> Option<&Category> {
        match &self.modal {
            Modal::AddChild { parent } => self.find_category(parent),
            _ => None,
        }
    }

    /// Drop references to categories that no longer exist.
    pub(crate) fn repair_selection(&mut self) {
        if let Some(id) = &self.selected_category
            && !category_ops::contains(&self.categories, id)
        {
            self.selected_category = None;
        }
    }
}
