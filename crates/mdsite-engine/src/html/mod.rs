//! # HTML Node Model
//!
//! A small owned tree of renderable nodes that serializes to HTML text.
//!
//! ## Types
//!
//! - **`LeafNode`**: terminal node. A leaf without a tag is raw text passthrough.
//! - **`ParentNode`**: composite node that exclusively owns its children.
//! - **`HtmlNode`**: sum type over the two.
//!
//! ## Escaping
//!
//! Leaf values are escaped once, when the leaf is constructed. Attribute values
//! are escaped once, when the node is serialized. Serializing the same node any
//! number of times never escapes twice.

pub mod node;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};

use thiserror::Error;

/// Structural errors raised while serializing a node tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlError {
    #[error("leaf node has no value")]
    MissingValue,
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    EmptyChildren { tag: String },
}

/// Serializes a node tree to an HTML string.
pub fn serialize(node: &HtmlNode) -> Result<String, HtmlError> {
    node.to_html()
}
