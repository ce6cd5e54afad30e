use crate::model::{CategoryId, DeletePolicy, IdGenerator, Todo, TodoId};
use crate::ops::category_ops;
use crate::ops::todo_ops;
use crate::ops::{Outcome, Rejection, is_blank};

use super::{Action, AppState, Modal};

/// Apply one action. Returns the next state and what happened; any outcome
/// other than `Applied` hands back the state unchanged.
pub fn reduce(
    mut state: AppState,
    action: Action,
    ids: &mut dyn IdGenerator,
    delete_policy: DeletePolicy,
) -> (AppState, Outcome) {
    let outcome = match action {
        Action::SelectCategory { id } => select_category(&mut state, id),
        Action::SetExpanded { id, is_expanded } => {
            category_ops::set_expanded(&mut state.categories, &id, is_expanded)
        }
        Action::DeleteCategory { id } => delete_category(&mut state, &id, delete_policy),
        Action::OpenRenameModal { id } => open_modal(&mut state, Modal::Rename { category: id }),
        Action::OpenAddChildModal { id } => open_modal(&mut state, Modal::AddChild { parent: id }),
        Action::AssignCategory { id } => assign_category(&mut state, id),
        Action::AddCategory { title, parent } => match parent {
            Some(parent) => {
                category_ops::add_or_edit(&mut state.categories, &parent, title, false, ids)
            }
            None => category_ops::add_category(&mut state.categories, title, ids),
        },
        Action::AddTodo { title } => match state.selected_category.clone() {
            Some(category) => todo_ops::add_todo(&mut state.todos, &category, title, ids),
            None => Rejection::NoCategorySelected.into(),
        },
        Action::SetChecked { id, is_done } => match state.selected_category.clone() {
            Some(category) => todo_ops::set_checked(&mut state.todos, &category, &id, is_done),
            None => Rejection::NoCategorySelected.into(),
        },
        Action::BeginEdit { id } => begin_edit(&mut state, &id),
        Action::SaveEdit {
            title,
            is_done,
            description,
        } => save_edit(&mut state, title, is_done, description),
        Action::CancelEdit => cancel_edit(&mut state),
        Action::ModalSave { title } => modal_save(&mut state, title, ids),
        Action::ModalClose => match state.modal {
            Modal::Closed => Rejection::ModalClosed.into(),
            _ => {
                state.modal = Modal::Closed;
                Outcome::Applied
            }
        },
    };
    (state, outcome)
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

fn select_category(state: &mut AppState, id: CategoryId) -> Outcome {
    if state.is_editing() {
        return Rejection::EditInProgress.into();
    }
    if !category_ops::contains(&state.categories, &id) {
        return Outcome::NotFound;
    }
    state.selected_category = Some(id);
    Outcome::Applied
}

fn delete_category(state: &mut AppState, id: &CategoryId, policy: DeletePolicy) -> Outcome {
    let Some(removed) = category_ops::delete_category(&mut state.categories, id) else {
        return Outcome::NotFound;
    };
    todo_ops::on_category_delete(&mut state.todos, &removed, policy);

    let gone = category_ops::subtree_ids(&removed);
    let is_gone = |c: &CategoryId| gone.contains(c);

    if state.selected_category.as_ref().is_some_and(is_gone) {
        state.selected_category = None;
    }
    if let Some(todo) = &state.edit_todo
        && (is_gone(&todo.category) || todo.previous_category.as_ref().is_some_and(is_gone))
    {
        state.edit_todo = None;
    }
    let modal_target = match &state.modal {
        Modal::Closed => None,
        Modal::Rename { category } => Some(category),
        Modal::AddChild { parent } => Some(parent),
    };
    if modal_target.is_some_and(is_gone) {
        state.modal = Modal::Closed;
    }
    Outcome::Applied
}

// ---------------------------------------------------------------------------
// Category dialog
// ---------------------------------------------------------------------------

fn open_modal(state: &mut AppState, modal: Modal) -> Outcome {
    let target = match &modal {
        Modal::Rename { category } => category,
        Modal::AddChild { parent } => parent,
        Modal::Closed => return Outcome::NotFound,
    };
    if !category_ops::contains(&state.categories, target) {
        return Outcome::NotFound;
    }
    state.modal = modal;
    Outcome::Applied
}

fn modal_save(state: &mut AppState, title: String, ids: &mut dyn IdGenerator) -> Outcome {
    let outcome = match &state.modal {
        Modal::Closed => return Rejection::ModalClosed.into(),
        Modal::Rename { category } => {
            category_ops::add_or_edit(&mut state.categories, category, title, true, ids)
        }
        Modal::AddChild { parent } => {
            category_ops::add_or_edit(&mut state.categories, parent, title, false, ids)
        }
    };
    // A blank title keeps the dialog open for another try
    if outcome.is_applied() {
        state.modal = Modal::Closed;
    }
    outcome
}

// ---------------------------------------------------------------------------
// Todo editor
// ---------------------------------------------------------------------------

fn begin_edit(state: &mut AppState, id: &TodoId) -> Outcome {
    if state.is_editing() {
        return Rejection::EditInProgress.into();
    }
    let Some(category) = &state.selected_category else {
        return Rejection::NoCategorySelected.into();
    };
    match todo_ops::find_todo(&state.todos, category, id) {
        Some(todo) => {
            state.edit_todo = Some(todo.clone());
            Outcome::Applied
        }
        None => Outcome::NotFound,
    }
}

fn assign_category(state: &mut AppState, id: CategoryId) -> Outcome {
    if !state.is_editing() {
        return Rejection::NotEditing.into();
    }
    if !category_ops::contains(&state.categories, &id) {
        return Outcome::NotFound;
    }
    if let Some(todo) = &mut state.edit_todo {
        todo_ops::assign_category(todo, id.clone());
    }
    state.selected_category = Some(id);
    Outcome::Applied
}

fn save_edit(
    state: &mut AppState,
    title: String,
    is_done: bool,
    description: Option<String>,
) -> Outcome {
    if !state.is_editing() {
        return Rejection::NotEditing.into();
    }
    if is_blank(&title) {
        return Rejection::EmptyTitle.into();
    }
    let Some(edited) = state.edit_todo.take() else {
        return Rejection::NotEditing.into();
    };
    let todo = Todo {
        title,
        is_done,
        description: description.filter(|d| !d.trim().is_empty()),
        ..edited
    };
    let category = todo_ops::save_edit(&mut state.todos, todo);
    state.selected_category = Some(category);
    Outcome::Applied
}

fn cancel_edit(state: &mut AppState) -> Outcome {
    let Some(edited) = state.edit_todo.take() else {
        return Rejection::NotEditing.into();
    };
    if let Some(previous) = edited.previous_category
        && category_ops::contains(&state.categories, &previous)
    {
        state.selected_category = Some(previous);
    }
    Outcome::Applied
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
