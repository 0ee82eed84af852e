//! Structural mutation and the expansion state machine.

use log::{debug, trace};

use super::{Expansion, Node, NodeId, Slot, Tree};
use crate::error::TreeError;
use crate::prompt::Prompt;

impl Tree {
    // -------------------------------------------------------------------------
    // Node access
    // -------------------------------------------------------------------------

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or(TreeError::UnknownNode(id))
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.node(id).ok_or(TreeError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn content(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(Node::content)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn expansion(&self, id: NodeId) -> Option<Expansion> {
        self.node(id).map(Node::expansion)
    }

    pub fn is_last(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_last)
    }

    pub fn is_root_level(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_root_level)
    }

    /// Root-level items in display order.
    pub fn roots(&self) -> &[NodeId] {
        self.children(NodeId::ROOT)
    }

    /// Follow child positions down from the root. `[0, 1]` is the second
    /// child of the first root-level item. An empty path is the root.
    pub fn node_at_path(&self, path: &[usize]) -> Option<NodeId> {
        path.iter().try_fold(NodeId::ROOT, |node, &position| {
            self.children(node).get(position).copied()
        })
    }

    /// Distance from the root: 1 for root-level items, 0 for the root and
    /// detached nodes.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// Attached nodes in depth-first display order, root excluded.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.roots().iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.children(id).iter().rev().copied());
            Some(id)
        })
    }

    /// Number of attached nodes, root excluded.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots().is_empty()
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Allocate a detached leaf node, recycling a freed slot if one exists.
    pub fn create_item(&mut self, content: impl Into<String>) -> NodeId {
        let node = Node::new(content.into());
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.nodes[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.nodes.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.nodes.len() - 1,
                    generation: 0,
                }
            }
        };
        trace!("Created node {id}");
        id
    }

    /// Append `child` to `parent`'s children and refresh the derived
    /// sibling and expansion state of `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if child.is_root() {
            return Err(TreeError::RootNotAllowed);
        }
        self.get(parent)?;
        if self.get(child)?.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }

        self.node_mut(parent)?.children.push(child);
        let node = self.node_mut(child)?;
        node.parent = Some(parent);
        node.root_level = parent.is_root();

        self.refresh(parent)?;
        debug!("Attached {child} under {parent}");
        Ok(())
    }

    /// Create a node and attach it at root level.
    pub fn add(&mut self, content: impl Into<String>) -> Result<NodeId, TreeError> {
        let id = self.create_item(content);
        self.attach(NodeId::ROOT, id)?;
        Ok(id)
    }

    /// Detach `node` from its parent and drop its whole subtree.
    ///
    /// Returns the former parent, or `None` if the node was never attached.
    pub fn remove(&mut self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        if node.is_root() {
            return Err(TreeError::RootNotAllowed);
        }
        let parent = self.get(node)?.parent;

        if let Some(parent) = parent {
            self.node_mut(parent)?.children.retain(|&c| c != node);
        }
        self.free_subtree(node);

        if let Some(parent) = parent {
            self.refresh(parent)?;
            debug!("Removed {node} from {parent}");
        }
        Ok(parent)
    }

    /// Remove every root-level item.
    pub fn clear(&mut self) {
        let roots = match self.nodes.first_mut().and_then(|slot| slot.node.as_mut()) {
            Some(root) => std::mem::take(&mut root.children),
            None => Vec::new(),
        };
        for id in roots {
            self.free_subtree(id);
        }
        debug!("Tree {} cleared", self.id);
    }

    fn free_subtree(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let Some(slot) = self
                .nodes
                .get_mut(id.index())
                .filter(|slot| slot.generation == id.generation())
            else {
                continue;
            };
            if let Some(freed) = slot.node.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.index());
                stack.extend(freed.children);
            }
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Recompute `IsLast` across `parent`'s children and the expansion of
    /// `parent` itself. Tolerates an empty child list.
    fn refresh(&mut self, parent: NodeId) -> Result<(), TreeError> {
        let children = self.get(parent)?.children.clone();
        let last = children.len().checked_sub(1);
        for (index, child) in children.iter().enumerate() {
            self.node_mut(*child)?.is_last = Some(index) == last;
        }

        if parent.is_root() {
            return Ok(());
        }

        let node = self.node_mut(parent)?;
        node.expansion = match (node.children.is_empty(), node.expansion) {
            (true, _) => Expansion::Leaf,
            (false, Expansion::Leaf) => Expansion::Closed,
            (false, state) => state,
        };
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Flip `Open` and `Closed`. Leaves are left alone.
    pub fn toggle_expansion(&mut self, id: NodeId) -> Result<Expansion, TreeError> {
        let node = self.node_mut(id)?;
        node.expansion = match node.expansion {
            Expansion::Leaf => Expansion::Leaf,
            Expansion::Open => Expansion::Closed,
            Expansion::Closed => Expansion::Open,
        };
        trace!("Toggled {id} to {:?}", node.expansion);
        Ok(node.expansion)
    }

    /// Force-expand a node. No-op on leaves and the root.
    pub fn open(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.set_branch_state(id, Expansion::Open)
    }

    /// Force-collapse a node. No-op on leaves and the root.
    pub fn close(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.set_branch_state(id, Expansion::Closed)
    }

    fn set_branch_state(&mut self, id: NodeId, state: Expansion) -> Result<(), TreeError> {
        if id.is_root() {
            return Ok(());
        }
        let node = self.node_mut(id)?;
        if node.expansion != Expansion::Leaf {
            node.expansion = state;
        }
        Ok(())
    }

    /// Expand all expandable nodes.
    pub fn expand_all(&mut self) {
        self.set_all(Expansion::Open);
    }

    /// Collapse all nodes.
    pub fn collapse_all(&mut self) {
        self.set_all(Expansion::Closed);
    }

    fn set_all(&mut self, state: Expansion) {
        for node in self.nodes.iter_mut().skip(1).filter_map(|slot| slot.node.as_mut()) {
            if node.expansion != Expansion::Leaf {
                node.expansion = state;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------------

    /// Replace content with `text` unless it is missing, empty, or only
    /// whitespace. Returns whether the content changed hands.
    pub fn apply_edit(&mut self, id: NodeId, text: Option<String>) -> Result<bool, TreeError> {
        if id.is_root() {
            return Err(TreeError::RootNotAllowed);
        }
        let node = self.node_mut(id)?;
        match text {
            Some(text) if !text.trim().is_empty() => {
                node.content = text;
                debug!("Edited {id}");
                Ok(true)
            }
            _ => {
                trace!("Discarded empty edit of {id}");
                Ok(false)
            }
        }
    }

    /// Ask the host for replacement text and apply it.
    pub fn edit_content(&mut self, id: NodeId, prompt: &mut dyn Prompt) -> Result<bool, TreeError> {
        if id.is_root() {
            return Err(TreeError::RootNotAllowed);
        }
        let current = self.get(id)?.content.clone();
        let text = prompt.prompt(&self.config.edit_message, &current);
        self.apply_edit(id, text)
    }
}
