//! Context menu actions.
//!
//! The node an action applies to is not stored on the tree between the
//! right-click and the menu pick. Each right-click creates a
//! [`MenuRequest`] and the chosen action receives it as an argument.

use std::rc::Rc;

use log::debug;

use super::{NodeId, Tree};
use crate::error::TreeError;
use crate::prompt::Prompt;

/// Target of one context menu invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRequest {
    /// The node that was right-clicked.
    pub target: NodeId,
}

impl MenuRequest {
    pub fn new(target: NodeId) -> Self {
        Self { target }
    }
}

/// A context menu action bound to a tree.
pub type MenuAction = Rc<dyn Fn(&mut Tree, &MenuRequest, &mut dyn Prompt) -> Result<(), TreeError>>;

pub(super) fn install_standard_actions(tree: &mut Tree) {
    let config = tree.config.clone();
    tree.add_menu_action(config.add_label, add_child);
    tree.add_menu_action(config.edit_label, edit);
    tree.add_menu_action(config.delete_label, delete);
    tree.add_menu_action(config.add_in_root_label, add_in_root);
    tree.add_menu_action(config.expand_label, expand);
    tree.add_menu_action(config.collapse_label, collapse);
}

/// Ask for item text; `None` when cancelled or blank.
fn ask_item_text(tree: &Tree, prompt: &mut dyn Prompt) -> Option<String> {
    prompt
        .prompt(&tree.config.add_message, "")
        .filter(|text| !text.trim().is_empty())
}

fn add_child(tree: &mut Tree, request: &MenuRequest, prompt: &mut dyn Prompt) -> Result<(), TreeError> {
    tree.get(request.target)?;
    let Some(text) = ask_item_text(tree, prompt) else {
        return Ok(());
    };

    let item = tree.create_item(text);
    tree.attach(request.target, item)?;
    tree.open(request.target)
}

fn edit(tree: &mut Tree, request: &MenuRequest, prompt: &mut dyn Prompt) -> Result<(), TreeError> {
    tree.edit_content(request.target, prompt).map(|_| ())
}

fn delete(tree: &mut Tree, request: &MenuRequest, prompt: &mut dyn Prompt) -> Result<(), TreeError> {
    tree.get(request.target)?;
    if !prompt.confirm(&tree.config.delete_message) {
        debug!("Deletion of {} declined", request.target);
        return Ok(());
    }

    if let Some(parent) = tree.remove(request.target)? {
        tree.open(parent)?;
    }
    Ok(())
}

fn add_in_root(tree: &mut Tree, request: &MenuRequest, prompt: &mut dyn Prompt) -> Result<(), TreeError> {
    tree.get(request.target)?;
    let Some(text) = ask_item_text(tree, prompt) else {
        return Ok(());
    };

    tree.add(text).map(|_| ())
}

fn expand(tree: &mut Tree, request: &MenuRequest, _prompt: &mut dyn Prompt) -> Result<(), TreeError> {
    tree.open(request.target)
}

fn collapse(tree: &mut Tree, request: &MenuRequest, _prompt: &mut dyn Prompt) -> Result<(), TreeError> {
    tree.close(request.target)
}

impl Tree {
    /// Append a labeled action to this tree's context menu.
    pub fn add_menu_action<F>(&mut self, label: impl Into<String>, action: F)
    where
        F: Fn(&mut Tree, &MenuRequest, &mut dyn Prompt) -> Result<(), TreeError> + 'static,
    {
        self.menu.add_action(label, Rc::new(action));
    }

    /// Run menu entry `index` for `request`.
    ///
    /// Returns false when no entry has that index.
    pub fn run_menu_action(
        &mut self,
        index: usize,
        request: &MenuRequest,
        prompt: &mut dyn Prompt,
    ) -> Result<bool, TreeError> {
        let Some(action) = self.menu.action(index).cloned() else {
            return Ok(false);
        };

        debug!(
            "Running menu action {:?} on {}",
            self.menu.entries()[index].label,
            request.target
        );
        action(self, request, prompt)?;
        Ok(true)
    }

    /// Run the first menu entry labeled `label`.
    pub fn run_menu_action_by_label(
        &mut self,
        label: &str,
        request: &MenuRequest,
        prompt: &mut dyn Prompt,
    ) -> Result<bool, TreeError> {
        match self.menu.entries().iter().position(|entry| entry.label == label) {
            Some(index) => self.run_menu_action(index, request, prompt),
            None => Ok(false),
        }
    }
}
