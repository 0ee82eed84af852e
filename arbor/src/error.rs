//! Error types

use crate::tree::NodeId;

/// Errors from structural tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The id does not name a live node (never created, or removed).
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// The root cannot be attached, removed, or edited.
    #[error("Operation not allowed on the tree root")]
    RootNotAllowed,

    /// The child already belongs to a parent.
    #[error("Node {0} is already attached")]
    AlreadyAttached(NodeId),

    /// Attaching would make a node its own ancestor.
    #[error("Attaching {child} under {parent} would create a cycle")]
    Cycle {
        /// Requested parent.
        parent: NodeId,
        /// Requested child.
        child: NodeId,
    },
}

/// Errors that can occur while loading record data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP response.
    #[error("HTTP {0}")]
    Status(u16),

    /// Body is not a record document.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a local document failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document parsed but could not be applied to the tree.
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
}
