use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a category, unique across the whole tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        CategoryId(s.to_string())
    }
}

/// A named grouping of todos. Categories nest: `children` holds the subtree
/// and `parent` mirrors the nesting for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// `None` for root categories
    pub parent: Option<CategoryId>,
    /// Child categories, newest first
    #[serde(default)]
    pub children: Vec<Category>,
    /// Carried for completeness; nothing toggles it yet
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub is_expanded: bool,
}

impl Category {
    /// A fresh category: no children, collapsed, not done
    pub fn new(id: CategoryId, title: String, parent: Option<CategoryId>) -> Self {
        Category {
            id,
            title,
            parent,
            children: Vec::new(),
            is_done: false,
            is_expanded: false,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of categories below this one (not counting itself)
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}
