mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Path from `root` down to the element with `id`, both ends included.
/// Empty when the id is not in the tree.
pub fn find_path<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }

    for child in element.child_elements() {
        if collect_path(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Nearest element carrying `class`, starting at `id` and walking up
/// towards `root`.
pub fn closest<'a>(root: &'a Element, id: &str, class: &str) -> Option<&'a Element> {
    find_path(root, id)
        .into_iter()
        .rev()
        .find(|element| element.has_class(class))
}

/// Direct parent of the element with `id`.
pub fn parent_of<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let path = find_path(root, id);
    path.len().checked_sub(2).map(|i| path[i])
}
