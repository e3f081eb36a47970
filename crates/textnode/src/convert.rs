//! Text node to HTML node conversion

use htmlnode::{Attributes, HtmlNode, LeafNode};

use crate::text_node::{TextNode, TextType};
use crate::{Result, TextNodeError};

/// Convert a text node into the leaf that renders it.
///
/// | Style  | Tag    | Value  | Attributes       |
/// |--------|--------|--------|------------------|
/// | Plain  | none   | text   | none             |
/// | Bold   | `b`    | text   | none             |
/// | Italic | `i`    | text   | none             |
/// | Code   | `code` | text   | none             |
/// | Link   | `a`    | text   | `href`           |
/// | Image  | `img`  | `""`   | `src`, `alt`     |
///
/// Links and images without a URL fail with [`TextNodeError::MissingField`].
pub fn text_node_to_html_node(text_node: &TextNode) -> Result<LeafNode> {
    tracing::trace!(text_type = %text_node.text_type, "Converting text node");

    let text = text_node.text.as_str();
    let leaf = match text_node.text_type {
        TextType::Plain => LeafNode::text(text),
        TextType::Bold => LeafNode::new("b", text),
        TextType::Italic => LeafNode::new("i", text),
        TextType::Code => LeafNode::new("code", text),
        TextType::Link => {
            let url = required_url(text_node, "Link")?;
            LeafNode::new("a", text).with_attributes([("href", url)])
        }
        TextType::Image => {
            let url = required_url(text_node, "Image")?;
            let attributes = Attributes::from([("src", url), ("alt", text)]);
            LeafNode::new("img", "").with_attributes(attributes)
        }
    };
    Ok(leaf)
}

/// Convert a run of text nodes, stopping at the first failure
pub fn text_nodes_to_html_nodes(text_nodes: &[TextNode]) -> Result<Vec<HtmlNode>> {
    text_nodes
        .iter()
        .map(|node| text_node_to_html_node(node).map(HtmlNode::from))
        .collect()
}

fn required_url<'a>(text_node: &'a TextNode, kind: &str) -> Result<&'a str> {
    text_node.url.as_deref().ok_or_else(|| {
        let err = TextNodeError::MissingField(format!("{kind} TextNode must have a URL"));
        tracing::debug!(error = %err, "Failed to convert text node");
        err
    })
}
