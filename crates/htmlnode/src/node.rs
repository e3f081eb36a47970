//! HTML node tree.
//!
//! A tree is made of two kinds of node: a [`LeafNode`] carries a value and
//! no children, a [`ParentNode`] carries children and no value. [`HtmlNode`]
//! is the closed sum of the two and is what parents hold as children.
//!
//! Fields are public so that trees can be assembled by any front end. The
//! structural requirements of each variant are checked when rendering, not
//! when constructing.

use std::fmt;

use crate::attributes::{attributes_to_html, Attributes};
use crate::options::RenderOptions;
use crate::render;
use crate::Result;

/// A node with a value and no children.
///
/// Without a tag the value is written as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// Element tag; `None` for raw text
    pub tag: Option<String>,

    /// Element content. Must be present to render; may be empty.
    pub value: Option<String>,

    /// Element attributes, ignored for raw text
    pub attributes: Option<Attributes>,
}

impl LeafNode {
    /// Create a leaf element
    pub fn new(tag: &str, value: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attributes: None,
        }
    }

    /// Create a raw text leaf
    pub fn text(value: &str) -> Self {
        Self {
            tag: None,
            value: Some(value.to_string()),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: impl Into<Attributes>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name, value);
        self
    }

    /// Get attributes as a string for HTML output
    pub fn attributes_to_html(&self) -> String {
        attributes_to_html(self.attributes.as_ref())
    }

    /// Render with default options
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        render::render_to_string(|out| render::render_leaf(self, options, out))
    }
}

/// A node with a tag and at least one child, and no value of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    /// Element tag. Must be present to render.
    pub tag: Option<String>,

    /// Child nodes in document order. Must be present and non-empty to render.
    pub children: Option<Vec<HtmlNode>>,

    /// Element attributes
    pub attributes: Option<Attributes>,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: impl Into<Attributes>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<HtmlNode>) {
        self.children.get_or_insert_with(Vec::new).push(child.into());
    }

    /// Get attributes as a string for HTML output
    pub fn attributes_to_html(&self) -> String {
        attributes_to_html(self.attributes.as_ref())
    }

    /// Render with default options
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        render::render_to_string(|out| render::render_parent(self, options, out))
    }
}

/// Any node of an HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf(_))
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, HtmlNode::Parent(_))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Leaf value; always `None` for a parent
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    /// Parent children; always `None` for a leaf
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Leaf(_) => None,
            HtmlNode::Parent(parent) => parent.children.as_deref(),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attributes.as_ref(),
            HtmlNode::Parent(parent) => parent.attributes.as_ref(),
        }
    }

    pub fn attributes_to_html(&self) -> String {
        attributes_to_html(self.attributes())
    }

    /// Render with default options
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        render::render_to_string(|out| render::render_node(self, options, out))
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Writes an optional field, `None` when absent
struct Field<'a, T: ?Sized>(Option<&'a T>);

impl<T: fmt::Display + ?Sized> fmt::Display for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeafNode(tag={}, value={}, attributes={})",
            Field(self.tag.as_deref()),
            Field(self.value.as_deref()),
            Field(self.attributes.as_ref())
        )
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParentNode(tag={}, children=", Field(self.tag.as_deref()))?;
        match &self.children {
            Some(children) => {
                f.write_str("[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str("]")?;
            }
            None => f.write_str("None")?,
        }
        write!(f, ", attributes={})", Field(self.attributes.as_ref()))
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            HtmlNode::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}
