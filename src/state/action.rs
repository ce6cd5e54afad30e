use serde::{Deserialize, Serialize};

use crate::model::{CategoryId, TodoId};

/// A user-initiated event. Every state change goes through one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    // --- Category list ---
    SelectCategory {
        id: CategoryId,
    },
    SetExpanded {
        id: CategoryId,
        is_expanded: bool,
    },
    DeleteCategory {
        id: CategoryId,
    },
    OpenRenameModal {
        id: CategoryId,
    },
    OpenAddChildModal {
        id: CategoryId,
    },
    /// Move the todo in the editor to another category
    AssignCategory {
        id: CategoryId,
    },

    // --- Add-category form ---
    AddCategory {
        title: String,
        #[serde(default)]
        parent: Option<CategoryId>,
    },

    // --- Add-todo form and todo list ---
    AddTodo {
        title: String,
    },
    SetChecked {
        id: TodoId,
        is_done: bool,
    },
    BeginEdit {
        id: TodoId,
    },

    // --- Todo editor ---
    SaveEdit {
        title: String,
        #[serde(default)]
        is_done: bool,
        #[serde(default)]
        description: Option<String>,
    },
    CancelEdit,

    // --- Category dialog ---
    ModalSave {
        title: String,
    },
    ModalClose,
}

impl Action {
    /// Snake-case name, as used in scripts and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SelectCategory { .. } => "select_category",
            Action::SetExpanded { .. } => "set_expanded",
            Action::DeleteCategory { .. } => "delete_category",
            Action::OpenRenameModal { .. } => "open_rename_modal",
            Action::OpenAddChildModal { .. } => "open_add_child_modal",
            Action::AssignCategory { .. } => "assign_category",
            Action::AddCategory { .. } => "add_category",
            Action::AddTodo { .. } => "add_todo",
            Action::SetChecked { .. } => "set_checked",
            Action::BeginEdit { .. } => "begin_edit",
            Action::SaveEdit { .. } => "save_edit",
            Action::CancelEdit => "cancel_edit",
            Action::ModalSave { .. } => "modal_save",
            Action::ModalClose => "modal_close",
        }
    }
}
