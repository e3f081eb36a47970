//! HTML node tree rendering
//!
//! Renders nodes depth-first into a single output buffer. Any structural
//! error aborts the whole render and the partial buffer is dropped.

use crate::attributes::Attributes;
use crate::node::{HtmlNode, LeafNode, ParentNode};
use crate::options::RenderOptions;
use crate::{HtmlNodeError, Result};

/// Run a renderer against a fresh buffer, returning the buffer on success
pub(crate) fn render_to_string<F>(render: F) -> Result<String>
where
    F: FnOnce(&mut String) -> Result<()>,
{
    let mut output = String::new();
    match render(&mut output) {
        Ok(()) => Ok(output),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to render node");
            Err(e)
        }
    }
}

pub(crate) fn render_node(
    node: &HtmlNode,
    options: &RenderOptions,
    out: &mut String,
) -> Result<()> {
    match node {
        HtmlNode::Leaf(leaf) => render_leaf(leaf, options, out),
        HtmlNode::Parent(parent) => render_parent(parent, options, out),
    }
}

pub(crate) fn render_leaf(
    leaf: &LeafNode,
    options: &RenderOptions,
    out: &mut String,
) -> Result<()> {
    let Some(value) = leaf.value.as_deref() else {
        return Err(invalid_state("LeafNode must have a value"));
    };

    let Some(tag) = leaf.tag.as_deref() else {
        out.push_str(value);
        return Ok(());
    };

    open_tag(tag, leaf.attributes.as_ref(), out);
    if options.is_void(tag) {
        return Ok(());
    }
    out.push_str(value);
    close_tag(tag, out);
    Ok(())
}

pub(crate) fn render_parent(
    parent: &ParentNode,
    options: &RenderOptions,
    out: &mut String,
) -> Result<()> {
    let Some(tag) = parent.tag.as_deref() else {
        return Err(invalid_state("ParentNode must have a tag"));
    };
    let Some(children) = parent.children.as_deref() else {
        return Err(invalid_state("ParentNode must have children"));
    };
    if children.is_empty() {
        return Err(invalid_state("ParentNode must have at least one child"));
    }

    open_tag(tag, parent.attributes.as_ref(), out);
    for child in children {
        render_node(child, options, out)?;
    }

    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, attributes: Option<&Attributes>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if let Some(attributes) = attributes {
        attributes.write_html(out);
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn invalid_state(message: &str) -> HtmlNodeError {
    HtmlNodeError::InvalidState(message.to_string())
}
