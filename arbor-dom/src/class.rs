//! Fixed marker vocabulary shared by every tree projection.
//!
//! Stylesheets key off these names, so they are part of the rendering
//! contract and never configurable.

/// Class names applied to projected elements.
pub struct ClassNames;

impl ClassNames {
    /// A tree row (`li`).
    pub const NODE: &'static str = "Node";
    /// The expand/collapse affordance inside a row.
    pub const EXPAND: &'static str = "Expand";
    /// The content cell inside a row.
    pub const CONTENT: &'static str = "Content";
    /// A children list (`ul`), including the root list.
    pub const CONTAINER: &'static str = "Container";

    /// Row without children.
    pub const EXPAND_LEAF: &'static str = "ExpandLeaf";
    /// Row with visible children.
    pub const EXPAND_OPEN: &'static str = "ExpandOpen";
    /// Row with hidden children.
    pub const EXPAND_CLOSED: &'static str = "ExpandClosed";

    /// Last row in its sibling group.
    pub const IS_LAST: &'static str = "IsLast";
    /// Row attached directly to the tree root.
    pub const IS_ROOT: &'static str = "IsRoot";

    /// Floating context menu container.
    pub const CONTEXT_MENU: &'static str = "context-menu";
    /// A single entry inside the context menu.
    pub const MENU_ENTRY: &'static str = "context-menu-entry";
}
