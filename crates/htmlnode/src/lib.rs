//! htmlnode - HTML node tree and rendering
//!
//! This crate provides the tree that inline and block content is assembled
//! into before it becomes an HTML string. It is used by `textnode` (which
//! turns styled inline text into leaf nodes) and by whatever assembles
//! blocks into parent nodes.
//!
//! # Architecture
//!
//! ```text
//! TextNode ──convert──▶ LeafNode ─┐
//!                                 ├──▶ HtmlNode tree ──render──▶ HTML String
//!          block parser ─────────▶ ParentNode ─┘
//! ```
//!
//! Attribute values and text are written verbatim. Nothing is escaped.
//!
//! # Example
//!
//! ```rust
//! use htmlnode::{LeafNode, ParentNode};
//!
//! let paragraph = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::new("b", "Bold text").into(),
//!         LeafNode::text("Normal text").into(),
//!         LeafNode::new("i", "italic text").into(),
//!     ],
//! );
//!
//! let html = paragraph.render().unwrap();
//! assert_eq!(html, "<p><b>Bold text</b>Normal text<i>italic text</i></p>");
//! ```

mod attributes;
mod node;
mod options;
mod render;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode};
pub use options::RenderOptions;

/// Error type for node rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlNodeError {
    /// The node does not satisfy its variant's structural requirements
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, HtmlNodeError>;
