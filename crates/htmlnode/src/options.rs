//! Configuration options for HTML rendering

/// Options for rendering a node tree
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Leaf tags written as a bare start tag, without content or end tag.
    /// Compared exactly against the leaf's tag.
    pub void_tags: Vec<String>,
}

impl RenderOptions {
    /// Check if a leaf with this tag renders as a void element
    pub fn is_void(&self, tag: &str) -> bool {
        self.void_tags.iter().any(|t| t == tag)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            void_tags: vec!["img".to_string()],
        }
    }
}
