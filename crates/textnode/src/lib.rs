//! # textnode
//!
//! Convert styled inline text into HTML nodes.
//!
//! A [`TextNode`] is a fragment of inline text tagged with a [`TextType`]
//! (plain, bold, italic, code, link or image). Converting it produces an
//! [`htmlnode::LeafNode`] that can be rendered on its own or placed inside
//! an [`htmlnode::ParentNode`].
//!
//! ## Example
//!
//! ```rust
//! use textnode::{text_node_to_html_node, TextNode, TextType};
//!
//! let node = TextNode::with_url("Click here", TextType::Link, "https://www.google.com");
//! let leaf = text_node_to_html_node(&node).unwrap();
//!
//! assert_eq!(leaf.render().unwrap(), r#"<a href="https://www.google.com">Click here</a>"#);
//! ```
//!
//! ## Example (paragraph)
//!
//! ```rust
//! use htmlnode::ParentNode;
//! use textnode::{text_nodes_to_html_nodes, TextNode, TextType};
//!
//! let inline = [
//!     TextNode::new("This is ", TextType::Plain),
//!     TextNode::new("bold", TextType::Bold),
//!     TextNode::new(" text", TextType::Plain),
//! ];
//! let paragraph = ParentNode::new("p", text_nodes_to_html_nodes(&inline).unwrap());
//!
//! assert_eq!(paragraph.render().unwrap(), "<p>This is <b>bold</b> text</p>");
//! ```

mod convert;
mod text_node;

pub use convert::{text_node_to_html_node, text_nodes_to_html_nodes};
pub use text_node::{TextNode, TextType};

use htmlnode::HtmlNodeError;

/// Error type for text node operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextNodeError {
    /// A field required by the node's style is absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The node's style is not one that can be converted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Render(#[from] HtmlNodeError),
}

pub type Result<T> = std::result::Result<T, TextNodeError>;
