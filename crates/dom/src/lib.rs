//! Live document tree for the SCos web runtime.
//!
//! This crate holds the in-process representation of the currently displayed
//! page: an arena of document/element/text nodes, queried and mutated by the
//! page script through element ids, selectors, attributes, and inline style
//! properties. There is no parsing here; the surrounding page supplies the
//! markup and the script only observes and mutates the resulting tree.

pub mod node;
pub mod printing;
pub mod style;
pub mod tree;

pub use indextree::NodeId;
pub use node::{DomNode, NodeKind};
pub use tree::Document;
