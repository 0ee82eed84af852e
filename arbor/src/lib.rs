//! Hierarchical tree-view widget.
//!
//! The [`Tree`] keeps a logical node arena as the source of truth and
//! projects it into an [`arbor_dom::Element`] tree on demand. Structural
//! edits keep the sibling (`IsLast`) and expansion markers consistent,
//! and a right-click [`ContextMenu`] exposes add/edit/delete actions.

pub mod config;
pub mod context_menu;
pub mod error;
pub mod loader;
pub mod prompt;
pub mod record;
pub mod tree;

pub use config::TreeConfig;
pub use context_menu::{ContextMenu, MenuEntry};
pub use error::{LoadError, TreeError};
pub use loader::{fetch_records, load_from_url, Fetcher, HttpFetcher};
pub use prompt::{Prompt, ScriptedPrompt};
pub use record::Record;
pub use tree::{Expansion, MenuAction, MenuRequest, Node, NodeId, Tree, TreeId};
