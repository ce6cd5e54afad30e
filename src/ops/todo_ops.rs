use crate::model::category::{Category, CategoryId};
use crate::model::config::DeletePolicy;
use crate::model::id::IdGenerator;
use crate::model::todo::{Todo, TodoId, TodoMap};

use super::category_ops::subtree_ids;
use super::{Outcome, Rejection, is_blank};

/// Prepend a new todo to `category`'s sequence.
pub fn add_todo(
    todos: &mut TodoMap,
    category: &CategoryId,
    title: String,
    ids: &mut dyn IdGenerator,
) -> Outcome {
    if is_blank(&title) {
        return Rejection::EmptyTitle.into();
    }
    let todo = Todo::new(TodoId(ids.next_id()), category.clone(), title);
    todos.entry(category.clone()).or_default().insert(0, todo);
    Outcome::Applied
}

/// Set the done flag of a todo within `category`'s sequence only.
pub fn set_checked(
    todos: &mut TodoMap,
    category: &CategoryId,
    todo_id: &TodoId,
    is_done: bool,
) -> Outcome {
    let found = todos
        .get_mut(category)
        .and_then(|list| list.iter_mut().find(|t| &t.id == todo_id));
    match found {
        Some(todo) => {
            todo.is_done = is_done;
            Outcome::Applied
        }
        None => Outcome::NotFound,
    }
}

pub fn todos_in<'a>(todos: &'a TodoMap, category: &CategoryId) -> &'a [Todo] {
    todos.get(category).map(Vec::as_slice).unwrap_or(&[])
}

pub fn find_todo<'a>(todos: &'a TodoMap, category: &CategoryId, todo_id: &TodoId) -> Option<&'a Todo> {
    todos_in(todos, category).iter().find(|t| &t.id == todo_id)
}

// ---------------------------------------------------------------------------
// Editing
// ---------------------------------------------------------------------------

/// Point an in-flight edit copy at another category. The first reassignment
/// remembers where the todo came from; later ones keep that origin.
pub fn assign_category(todo: &mut Todo, new_category: CategoryId) {
    if todo.previous_category.is_none() && todo.category != new_category {
        todo.previous_category = Some(todo.category.clone());
    }
    todo.category = new_category;
}

/// Remove a todo from every sequence. Returns how many copies were removed.
pub fn remove_everywhere(todos: &mut TodoMap, todo_id: &TodoId) -> usize {
    let mut removed = 0;
    for list in todos.values_mut() {
        let before = list.len();
        list.retain(|t| &t.id != todo_id);
        removed += before - list.len();
    }
    removed
}

/// Commit an edited todo: drop any stale copies, clear the reassignment
/// bookkeeping and file it at the front of its (possibly new) category.
/// Returns the category it ended up in.
pub fn save_edit(todos: &mut TodoMap, mut todo: Todo) -> CategoryId {
    remove_everywhere(todos, &todo.id);
    todo.previous_category = None;
    let category = todo.category.clone();
    todos.entry(category.clone()).or_default().insert(0, todo);
    category
}

// ---------------------------------------------------------------------------
// Category deletion
// ---------------------------------------------------------------------------

/// Apply `policy` to the todos filed under a just-removed category subtree.
pub fn on_category_delete(todos: &mut TodoMap, removed: &Category, policy: DeletePolicy) {
    match policy {
        DeletePolicy::DropEntry => {
            todos.shift_remove(&removed.id);
        }
        DeletePolicy::Cascade => {
            for id in subtree_ids(removed) {
                todos.shift_remove(&id);
            }
        }
        DeletePolicy::Reparent => {
            let mut moved = Vec::new();
            for id in subtree_ids(removed) {
                if let Some(list) = todos.shift_remove(&id) {
                    moved.extend(list);
                }
            }
            let Some(parent) = removed.parent.clone() else {
                return;
            };
            if moved.is_empty() {
                return;
            }
            for todo in &mut moved {
                todo.category = parent.clone();
            }
            let list = todos.entry(parent).or_default();
            moved.append(list);
            *list = moved;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
