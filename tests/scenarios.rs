//! End-to-end reducer scenarios driven through a `Session`.

use pretty_assertions::assert_eq;

use sprig::model::{CategoryId, DeletePolicy, SequentialIds, Todo, TodoId};
use sprig::ops::{Outcome, Rejection};
use sprig::state::{Action, AppState, Session};

fn session(policy: DeletePolicy) -> Session {
    Session::new(Box::new(SequentialIds::new()), policy)
}

fn cat(id: &str) -> CategoryId {
    id.into()
}

fn todo(id: &str) -> TodoId {
    id.into()
}

fn add_root(s: &mut Session, title: &str) -> CategoryId {
    assert_eq!(
        s.dispatch(Action::AddCategory {
            title: title.into(),
            parent: None,
        }),
        Outcome::Applied
    );
    s.state().categories[0].id.clone()
}

fn add_child(s: &mut Session, parent: &CategoryId, title: &str) -> CategoryId {
    assert_eq!(
        s.dispatch(Action::AddCategory {
            title: title.into(),
            parent: Some(parent.clone()),
        }),
        Outcome::Applied
    );
    s.state().find_category(parent).unwrap().children[0].id.clone()
}

fn add_todo(s: &mut Session, category: &CategoryId, title: &str) -> TodoId {
    assert_eq!(s.dispatch(Action::SelectCategory { id: category.clone() }), Outcome::Applied);
    assert_eq!(s.dispatch(Action::AddTodo { title: title.into() }), Outcome::Applied);
    s.state().todos_for(category)[0].id.clone()
}

fn titles(state: &AppState, category: &CategoryId) -> Vec<String> {
    state.todos_for(category).iter().map(|t| t.title.clone()).collect()
}

/// How many times a todo id appears across every sequence
fn occurrences(state: &AppState, id: &TodoId) -> usize {
    state
        .todos
        .values()
        .flat_map(|todos| todos.iter())
        .filter(|t| &t.id == id)
        .count()
}

#[test]
fn work_urgent_buy_milk() {
    let mut s = session(DeletePolicy::DropEntry);

    let work = add_root(&mut s, "Work");
    let root = &s.state().categories[0];
    assert_eq!(root.title, "Work");
    assert!(!root.is_expanded);
    assert!(root.children.is_empty());

    let urgent = add_child(&mut s, &work, "Urgent");
    let work_node = s.state().find_category(&work).unwrap();
    assert_eq!(work_node.children.len(), 1);
    assert_eq!(work_node.children[0].title, "Urgent");
    assert_eq!(work_node.children[0].parent, Some(work.clone()));

    assert_eq!(
        s.dispatch(Action::AddTodo {
            title: "Buy milk".into()
        }),
        Outcome::Rejected(Rejection::NoCategorySelected)
    );
    assert!(s.state().todos.is_empty());

    add_todo(&mut s, &urgent, "Buy milk");
    let todos = s.state().todos_for(&urgent);
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "Buy milk");
    assert!(!todos[0].is_done);
    assert_eq!(todos[0].description, None);
    assert_eq!(todos[0].category, urgent);
}

#[test]
fn reassign_and_save_moves_the_todo() {
    let mut s = session(DeletePolicy::DropEntry);
    let a = add_root(&mut s, "A");
    let b = add_root(&mut s, "B");
    let in_a = add_todo(&mut s, &a, "from A");
    add_todo(&mut s, &b, "from B");

    s.dispatch(Action::SelectCategory { id: a.clone() });
    assert_eq!(s.dispatch(Action::BeginEdit { id: in_a.clone() }), Outcome::Applied);
    assert_eq!(s.dispatch(Action::AssignCategory { id: b.clone() }), Outcome::Applied);
    assert_eq!(s.state().selected_category, Some(b.clone()));
    // Nothing moves until save
    assert_eq!(titles(s.state(), &a), vec!["from A"]);

    assert_eq!(
        s.dispatch(Action::SaveEdit {
            title: "from A".into(),
            is_done: false,
            description: None,
        }),
        Outcome::Applied
    );

    let state = s.state();
    assert!(state.todos_for(&a).is_empty());
    assert_eq!(titles(state, &b), vec!["from A", "from B"]);
    assert_eq!(occurrences(state, &in_a), 1);
    let moved: &Todo = &state.todos_for(&b)[0];
    assert_eq!(moved.category, b);
    assert_eq!(moved.previous_category, None);
    assert_eq!(state.selected_category, Some(b));
    assert!(!state.is_editing());
}

#[test]
fn reassign_then_cancel_restores_selection() {
    let mut s = session(DeletePolicy::DropEntry);
    let a = add_root(&mut s, "A");
    let b = add_root(&mut s, "B");
    let id = add_todo(&mut s, &a, "stay put");
    let before = s.state().todos.clone();

    s.dispatch(Action::SelectCategory { id: a.clone() });
    s.dispatch(Action::BeginEdit { id: id.clone() });
    s.dispatch(Action::AssignCategory { id: b.clone() });
    assert_eq!(s.dispatch(Action::CancelEdit), Outcome::Applied);

    let state = s.state();
    assert_eq!(state.selected_category, Some(a.clone()));
    assert_eq!(state.todos, before);
    assert_eq!(state.todos_for(&a)[0].previous_category, None);
    assert!(!state.is_editing());
}

#[test]
fn edit_round_trip_keeps_one_copy() {
    let mut s = session(DeletePolicy::DropEntry);
    let home = add_root(&mut s, "Home");
    add_todo(&mut s, &home, "Sweep");
    let dishes = add_todo(&mut s, &home, "Dishes");

    s.dispatch(Action::BeginEdit { id: dishes.clone() });
    s.dispatch(Action::SaveEdit {
        title: "Dishes and pans".into(),
        is_done: true,
        description: Some("after dinner".into()),
    });

    let state = s.state();
    assert_eq!(occurrences(state, &dishes), 1);
    let saved = &state.todos_for(&home)[0];
    assert_eq!(saved.title, "Dishes and pans");
    assert!(saved.is_done);
    assert_eq!(saved.description.as_deref(), Some("after dinner"));
}

#[test]
fn missing_ids_leave_the_tree_alone() {
    let mut s = session(DeletePolicy::DropEntry);
    let work = add_root(&mut s, "Work");
    add_child(&mut s, &work, "Urgent");
    let before = s.state().clone();

    let ghost = cat("ghost");
    for action in [
        Action::SetExpanded {
            id: ghost.clone(),
            is_expanded: true,
        },
        Action::AddCategory {
            title: "x".into(),
            parent: Some(ghost.clone()),
        },
        Action::DeleteCategory { id: ghost.clone() },
        Action::SelectCategory { id: ghost.clone() },
    ] {
        assert_eq!(s.dispatch(action), Outcome::NotFound);
    }
    assert_eq!(s.state(), &before);
}

/// Home(1) > Garden(2) > Beds(3), plus Work(4); one todo in each.
fn nested(policy: DeletePolicy) -> Session {
    let mut s = session(policy);
    let home = add_root(&mut s, "Home");
    let garden = add_child(&mut s, &home, "Garden");
    let beds = add_child(&mut s, &garden, "Beds");
    let work = add_root(&mut s, "Work");
    assert_eq!(
        (home.as_str(), garden.as_str(), beds.as_str(), work.as_str()),
        ("1", "2", "3", "4")
    );
    add_todo(&mut s, &home, "Dishes");
    add_todo(&mut s, &garden, "Weed");
    add_todo(&mut s, &beds, "Mulch");
    add_todo(&mut s, &work, "Ship");
    s
}

#[test]
fn drop_entry_leaves_descendant_entries() {
    let mut s = nested(DeletePolicy::DropEntry);
    s.dispatch(Action::DeleteCategory { id: cat("2") });

    let state = s.state();
    assert!(state.find_category(&cat("2")).is_none());
    assert!(state.find_category(&cat("3")).is_none());
    assert!(!state.todos.contains_key(&cat("2")));
    assert_eq!(titles(state, &cat("3")), vec!["Mulch"]);
    assert_eq!(titles(state, &cat("1")), vec!["Dishes"]);
    assert_eq!(titles(state, &cat("4")), vec!["Ship"]);
}

#[test]
fn cascade_drops_the_whole_subtree() {
    let mut s = nested(DeletePolicy::Cascade);
    s.dispatch(Action::DeleteCategory { id: cat("2") });

    let state = s.state();
    assert!(!state.todos.contains_key(&cat("2")));
    assert!(!state.todos.contains_key(&cat("3")));
    assert_eq!(titles(state, &cat("1")), vec!["Dishes"]);
}

#[test]
fn reparent_moves_todos_up() {
    let mut s = nested(DeletePolicy::Reparent);
    s.dispatch(Action::DeleteCategory { id: cat("2") });

    let state = s.state();
    let mut moved = titles(state, &cat("1"));
    moved.sort();
    assert_eq!(moved, vec!["Dishes", "Mulch", "Weed"]);
    assert!(state.todos_for(&cat("1")).iter().all(|t| t.category == cat("1")));
    assert!(!state.todos.contains_key(&cat("3")));
}

#[test]
fn deleting_the_selected_category_clears_selection_and_editor() {
    let mut s = nested(DeletePolicy::DropEntry);
    s.dispatch(Action::SelectCategory { id: cat("3") });
    let mulch = s.state().todos_for(&cat("3"))[0].id.clone();
    s.dispatch(Action::BeginEdit { id: mulch });
    s.dispatch(Action::DeleteCategory { id: cat("2") });

    assert_eq!(s.state().selected_category, None);
    assert!(!s.state().is_editing());
}

#[test]
fn undo_and_redo_walk_the_history() {
    let mut s = session(DeletePolicy::DropEntry);
    let work = add_root(&mut s, "Work");
    add_todo(&mut s, &work, "Ship");
    s.dispatch(Action::DeleteCategory { id: work.clone() });
    assert!(s.state().categories.is_empty());

    assert!(s.undo());
    assert_eq!(s.state().categories[0].title, "Work");
    assert_eq!(titles(s.state(), &work), vec!["Ship"]);
    assert_eq!(s.state().selected_category, Some(work.clone()));

    assert!(s.redo());
    assert!(s.state().categories.is_empty());
    assert!(!s.redo());

    // Select-only steps are not recorded
    assert!(s.undo());
    s.dispatch(Action::SelectCategory { id: work.clone() });
    assert!(s.undo());
    assert!(s.state().todos_for(&work).is_empty());
}

#[test]
fn blank_titles_are_rejected_everywhere() {
    let mut s = session(DeletePolicy::DropEntry);
    assert_eq!(
        s.dispatch(Action::AddCategory {
            title: "   ".into(),
            parent: None,
        }),
        Outcome::Rejected(Rejection::EmptyTitle)
    );
    let work = add_root(&mut s, "Work");
    s.dispatch(Action::SelectCategory { id: work.clone() });
    assert_eq!(
        s.dispatch(Action::AddTodo { title: "".into() }),
        Outcome::Rejected(Rejection::EmptyTitle)
    );

    s.dispatch(Action::OpenRenameModal { id: work.clone() });
    assert_eq!(
        s.dispatch(Action::ModalSave { title: " ".into() }),
        Outcome::Rejected(Rejection::EmptyTitle)
    );
    assert!(s.state().show_modal());
    assert_eq!(s.dispatch(Action::ModalSave { title: "Job".into() }), Outcome::Applied);
    assert!(!s.state().show_modal());
    assert_eq!(s.state().categories[0].title, "Job");
}

#[test]
fn toggling_needs_the_right_category() {
    let mut s = session(DeletePolicy::DropEntry);
    let a = add_root(&mut s, "A");
    let b = add_root(&mut s, "B");
    let id = add_todo(&mut s, &a, "task");

    s.dispatch(Action::SelectCategory { id: b });
    assert_eq!(
        s.dispatch(Action::SetChecked {
            id: id.clone(),
            is_done: true
        }),
        Outcome::NotFound
    );
    s.dispatch(Action::SelectCategory { id: a.clone() });
    assert_eq!(
        s.dispatch(Action::SetChecked {
            id: todo(id.as_str()),
            is_done: true
        }),
        Outcome::Applied
    );
    assert!(s.state().todos_for(&a)[0].is_done);
}

#[test]
fn undo_is_refused_while_a_todo_is_in_the_editor() {
    let mut s = session(DeletePolicy::DropEntry);
    let a = add_root(&mut s, "A");
    let b = add_root(&mut s, "B");
    let id = add_todo(&mut s, &a, "T");

    s.dispatch(Action::BeginEdit { id: id.clone() });
    s.dispatch(Action::AssignCategory { id: b.clone() });
    assert!(!s.undo());
    assert!(!s.undo());
    assert!(!s.redo());
    assert!(s.state().find_category(&b).is_some());

    assert_eq!(
        s.dispatch(Action::SaveEdit {
            title: "T".into(),
            is_done: false,
            description: None,
        }),
        Outcome::Applied
    );
    let state = s.state();
    assert_eq!(state.selected_category, Some(b.clone()));
    assert!(state.find_category(&b).is_some());
    assert_eq!(titles(state, &b), vec!["T"]);
    assert!(state.todos_for(&a).is_empty());
    assert_eq!(occurrences(state, &id), 1);

    // Undo is available again once the editor is closed
    assert!(s.undo());
    assert_eq!(titles(s.state(), &a), vec!["T"]);
}
