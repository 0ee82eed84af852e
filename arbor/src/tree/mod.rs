//! Tree widget: logical node arena plus its projection and interaction.
//!
//! The arena is the source of truth. Rendering ([`Tree::render`]) is a pure
//! function of it, and events are resolved against that projection the same
//! way a browser handler would walk up from `event.target`.

mod actions;
mod events;
mod render;
mod state;

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::TreeConfig;
use crate::context_menu::ContextMenu;

pub use actions::{MenuAction, MenuRequest};

/// Unique identifier for a Tree widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(usize);

impl TreeId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__tree_{}", self.0)
    }
}

/// Stable handle to a node in a [`Tree`]'s arena.
///
/// Slots of removed nodes are recycled, but each reuse bumps the slot's
/// generation, so a handle to a removed node stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// The distinguished root. It has no content and is never rendered.
    pub const ROOT: NodeId = NodeId {
        index: 0,
        generation: 0,
    };

    /// Arena slot of this node. Shared with earlier, removed occupants.
    pub fn index(self) -> usize {
        self.index
    }

    /// How many times the slot had been recycled when this node was created.
    pub fn generation(self) -> u32 {
        self.generation
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

/// One arena slot. `node` is `None` while the slot sits on the free list.
#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Expansion state of a node.
///
/// `Leaf` if and only if the node has no children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    #[default]
    Leaf,
    Open,
    Closed,
}

/// A node in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    content: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expansion: Expansion,
    is_last: bool,
    root_level: bool,
}

impl Node {
    fn new(content: String) -> Self {
        Self {
            content,
            parent: None,
            children: Vec::new(),
            expansion: Expansion::Leaf,
            // Provisional until attached
            is_last: true,
            root_level: false,
        }
    }

    /// Display markup. Trusted, emitted verbatim.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in display order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// True iff this is the last child of its parent.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// True iff attached directly under the root.
    pub fn is_root_level(&self) -> bool {
        self.root_level
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A hierarchical tree view with a right-click edit menu.
///
/// Nodes live in an arena. Removing a node (or replacing the data) frees
/// its slots for the next [`create_item`](Tree::create_item). Nodes that
/// are created but never attached keep their slot until
/// [`remove`](Tree::remove) is called on them.
pub struct Tree {
    id: TreeId,
    config: TreeConfig,
    nodes: Vec<Slot>,
    free: Vec<usize>,
    menu: ContextMenu<MenuAction>,
    /// Target of the most recent right-click, handed to menu actions.
    pending: Option<MenuRequest>,
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("id", &self.id)
            .field("len", &self.len())
            .field("menu", &self.menu)
            .finish()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}

impl Tree {
    /// Create and initialize a tree: root container plus the standard
    /// context menu actions (unless disabled in `config`).
    pub fn new(config: TreeConfig) -> Self {
        let mut root = Node::new(String::new());
        root.is_last = false;

        let mut tree = Self {
            id: TreeId::new(),
            config,
            nodes: vec![Slot {
                generation: 0,
                node: Some(root),
            }],
            free: Vec::new(),
            menu: ContextMenu::new(),
            pending: None,
        };

        if tree.config.standard_actions {
            actions::install_standard_actions(&mut tree);
        }

        log::debug!("Tree {} initialized", tree.id);
        tree
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn menu(&self) -> &ContextMenu<MenuAction> {
        &self.menu
    }

    /// Element id of this tree's context menu.
    pub fn menu_owner(&self) -> String {
        format!("{}-menu", self.id)
    }

    /// The request created by the most recent right-click on a node.
    pub fn pending_request(&self) -> Option<MenuRequest> {
        self.pending
    }
}
