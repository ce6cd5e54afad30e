use crate::model::category::{Category, CategoryId};
use crate::model::id::IdGenerator;

use super::{Outcome, Rejection, is_blank};

// ---------------------------------------------------------------------------
// Insert / rename
// ---------------------------------------------------------------------------

/// Prepend a new root category.
pub fn add_category(
    categories: &mut Vec<Category>,
    title: String,
    ids: &mut dyn IdGenerator,
) -> Outcome {
    if is_blank(&title) {
        return Rejection::EmptyTitle.into();
    }
    let category = Category::new(CategoryId(ids.next_id()), title, None);
    categories.insert(0, category);
    Outcome::Applied
}

/// Add a child under `target` (prepended to its children), or with `is_edit`
/// rename `target` in place. Unknown targets leave the tree untouched.
pub fn add_or_edit(
    categories: &mut [Category],
    target: &CategoryId,
    title: String,
    is_edit: bool,
    ids: &mut dyn IdGenerator,
) -> Outcome {
    if is_blank(&title) {
        return Rejection::EmptyTitle.into();
    }
    let Some(category) = find_category_mut(categories, target) else {
        return Outcome::NotFound;
    };

    if is_edit {
        category.title = title;
    } else {
        let child = Category::new(CategoryId(ids.next_id()), title, Some(category.id.clone()));
        category.children.insert(0, child);
    }
    Outcome::Applied
}

// ---------------------------------------------------------------------------
// Expand / collapse
// ---------------------------------------------------------------------------

pub fn set_expanded(categories: &mut [Category], target: &CategoryId, is_expanded: bool) -> Outcome {
    match find_category_mut(categories, target) {
        Some(category) => {
            category.is_expanded = is_expanded;
            Outcome::Applied
        }
        None => Outcome::NotFound,
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Remove `target` and its whole subtree from whichever level holds it.
/// Returns the removed subtree, or None if `target` is not in the tree.
pub fn delete_category(categories: &mut Vec<Category>, target: &CategoryId) -> Option<Category> {
    if let Some(idx) = categories.iter().position(|c| &c.id == target) {
        return Some(categories.remove(idx));
    }
    for category in categories.iter_mut() {
        if let Some(removed) = delete_category(&mut category.children, target) {
            return Some(removed);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

pub fn find_category<'a>(categories: &'a [Category], target: &CategoryId) -> Option<&'a Category> {
    for category in categories {
        if &category.id == target {
            return Some(category);
        }
        if let Some(found) = find_category(&category.children, target) {
            return Some(found);
        }
    }
    None
}

pub fn find_category_mut<'a>(
    categories: &'a mut [Category],
    target: &CategoryId,
) -> Option<&'a mut Category> {
    for category in categories.iter_mut() {
        if &category.id == target {
            return Some(category);
        }
        if let Some(found) = find_category_mut(&mut category.children, target) {
            return Some(found);
        }
    }
    None
}

pub fn contains(categories: &[Category], target: &CategoryId) -> bool {
    find_category(categories, target).is_some()
}

/// Ids of `category` and every descendant, parents before children.
pub fn subtree_ids(category: &Category) -> Vec<CategoryId> {
    let mut ids = Vec::new();
    collect_ids(category, &mut ids);
    ids
}

fn collect_ids(category: &Category, ids: &mut Vec<CategoryId>) {
    ids.push(category.id.clone());
    for child in &category.children {
        collect_ids(child, ids);
    }
}

/// Titles from the root down to `target` (inclusive).
pub fn category_path<'a>(categories: &'a [Category], target: &CategoryId) -> Option<Vec<&'a str>> {
    for category in categories {
        if &category.id == target {
            return Some(vec![category.title.as_str()]);
        }
        if let Some(mut rest) = category_path(&category.children, target) {
            rest.insert(0, category.title.as_str());
            return Some(rest);
        }
    }
    None
}

/// Visit every category, parents before children.
pub fn for_each_category(categories: &[Category], f: &mut dyn FnMut(&Category, usize)) {
    walk(categories, 0, f);
}

fn walk(categories: &[Category], depth: usize, f: &mut dyn FnMut(&Category, usize)) {
    for category in categories {
        f(category, depth);
        walk(&category.children, depth + 1, f);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
