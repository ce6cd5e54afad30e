use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::category::CategoryId;

/// Identifier of a todo
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl TodoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId(s.to_string())
    }
}

/// A single to-do item owned by a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Owning category
    pub category: CategoryId,
    pub title: String,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub description: Option<String>,
    /// Category the todo was in before being reassigned in the editor.
    /// Only set on the in-flight edit copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_category: Option<CategoryId>,
}

impl Todo {
    pub fn new(id: TodoId, category: CategoryId, title: String) -> Self {
        Todo {
            id,
            category,
            title,
            is_done: false,
            description: None,
            previous_category: None,
        }
    }
}

/// Todos grouped by owning category, each sequence newest first.
/// Keys keep insertion order so output is stable.
pub type TodoMap = IndexMap<CategoryId, Vec<Todo>>;
