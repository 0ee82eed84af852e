//! Scripted menu actions applied before printing.
//!
//! An edit is written `ACTION:PATH[:TEXT]`. `ACTION` is a context menu
//! label, `PATH` is a dot-separated list of child positions from the root
//! (`0.1` is the second child of the first root-level item, empty is the
//! root), and `TEXT` answers the action's prompt. Confirmations are
//! always accepted.

use std::str::FromStr;

use arbor::{MenuRequest, ScriptedPrompt, Tree, TreeError};
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedEdit {
    pub action: String,
    pub path: Vec<usize>,
    pub text: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("no node at path {0:?}")]
    NoSuchNode(String),
    #[error("no menu action labeled {0:?}")]
    UnknownAction(String),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl FromStr for ScriptedEdit {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.splitn(3, ':');
        let action = parts.next().unwrap_or_default();
        let Some(path) = parts.next() else {
            return Err(format!("expected ACTION:PATH[:TEXT], got {raw:?}"));
        };
        if action.is_empty() {
            return Err(format!("missing action in {raw:?}"));
        }

        let path = if path.is_empty() {
            Vec::new()
        } else {
            path.split('.')
                .map(|step| {
                    step.parse::<usize>()
                        .map_err(|_| format!("bad path step {step:?} in {raw:?}"))
                })
                .collect::<Result<_, _>>()?
        };

        Ok(Self {
            action: action.to_string(),
            path,
            text: parts.next().map(str::to_string),
        })
    }
}

impl ScriptedEdit {
    fn path_label(&self) -> String {
        self.path
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Run the edit's menu action against the node at its path.
    pub fn apply(&self, tree: &mut Tree) -> Result<(), EditError> {
        let target = tree
            .node_at_path(&self.path)
            .ok_or_else(|| EditError::NoSuchNode(self.path_label()))?;

        let mut prompt = ScriptedPrompt::new().confirm_with(true);
        if let Some(text) = &self.text {
            prompt = prompt.answer(text.clone());
        }

        if !tree.run_menu_action_by_label(&self.action, &MenuRequest::new(target), &mut prompt)? {
            return Err(EditError::UnknownAction(self.action.clone()));
        }
        debug!("Applied {:?} at [{}]", self.action, self.path_label());
        Ok(())
    }
}
