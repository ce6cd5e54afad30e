use serde::Serialize;

use crate::model::{Category, CategoryId, Todo, TodoMap};
use crate::ops::category_ops;
use crate::state::{AppState, Modal};

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StateJson<'a> {
    pub categories: &'a [Category],
    pub todos: &'a TodoMap,
    pub selected_category: Option<&'a CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<&'a Todo>,
    pub modal: &'a Modal,
}

impl<'a> StateJson<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        StateJson {
            categories: &state.categories,
            todos: &state.todos,
            selected_category: state.selected_category.as_ref(),
            editing: state.edit_todo.as_ref(),
            modal: &state.modal,
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Render the category tree with each category's todos beneath it.
pub fn format_tree(state: &AppState) -> String {
    if state.categories.is_empty() {
        return "(no categories)\n".to_string();
    }
    let mut out = String::new();
    category_ops::for_each_category(&state.categories, &mut |cat, depth| {
        let indent = "  ".repeat(depth);
        out.push_str(&format!("{}{}\n", indent, cat.title));
        for todo in state.todos_for(&cat.id) {
            let mark = if todo.is_done { 'x' } else { ' ' };
            out.push_str(&format!("{}  [{}] {}\n", indent, mark, todo.title));
        }
    });
    out
}

/// One-line summary of where the session ended up
pub fn format_summary(state: &AppState) -> String {
    let mut category_count = 0;
    category_ops::for_each_category(&state.categories, &mut |_, _| category_count += 1);
    let todo_count: usize = state.todos.values().map(Vec::len).sum();
    let selected = state
        .selected_category()
        .map(|c| c.title.as_str())
        .unwrap_or("none");
    format!(
        "{} categories, {} todos, selected: {}",
        category_count, todo_count, selected
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeletePolicy, SequentialIds};
    use crate::state::{Action, Session};

    fn sample_session() -> Session {
        let mut s = Session::new(Box::new(SequentialIds::new()), DeletePolicy::DropEntry);
        // ids: Home=1, Work=2, Garden=3
        s.dispatch(Action::AddCategory {
            title: "Home".into(),
            parent: None,
        });
        s.dispatch(Action::AddCategory {
            title: "Work".into(),
            parent: None,
        });
        s.dispatch(Action::AddCategory {
            title: "Garden".into(),
            parent: Some("1".into()),
        });
        s.dispatch(Action::SelectCategory { id: "1".into() });
        s.dispatch(Action::AddTodo {
            title: "Sweep".into(),
        });
        s.dispatch(Action::AddTodo {
            title: "Dishes".into(),
        });
        s.dispatch(Action::SetChecked {
            id: "5".into(),
            is_done: true,
        });
        s.dispatch(Action::SelectCategory { id: "3".into() });
        s.dispatch(Action::AddTodo {
            title: "Weed".into(),
        });
        s
    }

    #[test]
    fn tree_lists_categories_and_todos() {
        let s = sample_session();
        insta::assert_snapshot!(format_tree(s.state()), @r"
        Work
        Home
          [x] Dishes
          [ ] Sweep
          Garden
            [ ] Weed
        ");
    }

    #[test]
    fn empty_tree() {
        assert_eq!(format_tree(&AppState::new()), "(no categories)\n");
    }

    #[test]
    fn summary_counts_everything() {
        let s = sample_session();
        assert_eq!(
            format_summary(s.state()),
            "3 categories, 3 todos, selected: Garden"
        );
    }

    #[test]
    fn json_omits_editing_when_idle() {
        let s = sample_session();
        let json = serde_json::to_value(StateJson::from_state(s.state())).unwrap();
        assert_eq!(json["selected_category"], "3");
        assert_eq!(json["modal"]["mode"], "closed");
        assert!(json.get("editing").is_none());
        assert_eq!(json["todos"]["1"][0]["title"], "Dishes");
        assert_eq!(json["categories"][1]["children"][0]["title"], "Garden");
    }
}
