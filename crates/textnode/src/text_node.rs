//! Styled inline text fragments.

use std::fmt;
use std::str::FromStr;

use crate::{Result, TextNodeError};

/// Semantic style of an inline text fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Unstyled text
    Plain,
    Bold,
    Italic,
    /// Inline code
    Code,
    /// Hyperlink; requires a URL
    Link,
    /// Image with the text as alt text; requires a URL
    Image,
}

impl TextType {
    /// Style name as used in text node listings
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Plain => "text",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextType {
    type Err = TextNodeError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "text" | "plain" => Ok(TextType::Plain),
            "bold" => Ok(TextType::Bold),
            "italic" => Ok(TextType::Italic),
            "code" => Ok(TextType::Code),
            "link" => Ok(TextType::Link),
            "image" => Ok(TextType::Image),
            _ => Err(TextNodeError::InvalidInput(format!("Invalid text type: {name}"))),
        }
    }
}

/// A fragment of inline text with its style.
///
/// Two text nodes are equal when text, style and URL are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    /// Target of a link or source of an image
    pub url: Option<String>,
}

impl TextNode {
    /// Create a text node without a URL
    pub fn new(text: &str, text_type: TextType) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: None,
        }
    }

    pub fn with_url(text: &str, text_type: TextType, url: &str) -> Self {
        Self {
            text: text.to_string(),
            text_type,
            url: Some(url.to_string()),
        }
    }

    /// Create a text node from a style name such as `"bold"`
    pub fn parse(text: &str, text_type: &str, url: Option<&str>) -> Result<Self> {
        Ok(Self {
            text: text.to_string(),
            text_type: text_type.parse()?,
            url: url.map(str::to_string),
        })
    }

    /// Convert to an HTML leaf and render it
    pub fn to_html(&self) -> Result<String> {
        let leaf = crate::convert::text_node_to_html_node(self)?;
        Ok(leaf.render()?)
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextNode({}, {}, {})",
            self.text,
            self.text_type,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
