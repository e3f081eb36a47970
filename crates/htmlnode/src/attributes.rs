//! Insertion-ordered HTML attributes

use std::fmt;

use indexmap::IndexMap;

/// Attributes of an HTML element.
///
/// Keys keep the order they were first inserted in, and that order is the
/// order they are written out in, so equality compares them in order too.
#[derive(Debug, Clone, Default)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. An existing key keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get an attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as ` name="value"` pairs, ready to follow a tag name
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Attributes {}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{name}': '{value}'")?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Render optional attributes; `None` renders as nothing
pub(crate) fn attributes_to_html(attributes: Option<&Attributes>) -> String {
    attributes.map(Attributes::to_html).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_empty() {
        assert_eq!(Attributes::new().to_html(), "");
        assert_eq!(attributes_to_html(None), "");
    }

    #[test]
    fn test_single() {
        let attrs = Attributes::from([("href", "https://www.google.com")]);
        assert_eq!(attrs.to_html(), " href=\"https://www.google.com\"");
    }

    #[test]
    fn test_insertion_order() {
        let attrs = Attributes::from([
            ("href", "https://www.google.com"),
            ("target", "_blank"),
            ("class", "link"),
        ]);
        assert_eq!(
            attrs.to_html(),
            " href=\"https://www.google.com\" target=\"_blank\" class=\"link\""
        );

        let reversed = Attributes::from([("z", "1"), ("a", "2")]);
        assert_eq!(reversed.to_html(), " z=\"1\" a=\"2\"");
    }

    #[test]
    fn test_values_not_escaped() {
        let attrs = Attributes::from([("title", "say \"hi\" & <bye>")]);
        assert_eq!(attrs.to_html(), " title=\"say \"hi\" & <bye>\"");
    }

    #[test]
    fn test_equality_is_ordered() {
        let src_first = Attributes::from([("src", "x"), ("alt", "y")]);
        let alt_first = Attributes::from([("alt", "y"), ("src", "x")]);

        assert_ne!(src_first, alt_first);
        assert_eq!(src_first, Attributes::from([("src", "x"), ("alt", "y")]));
    }

    #[test]
    fn test_display() {
        let attrs = Attributes::from([("href", "https://example.com"), ("target", "_blank")]);
        assert_eq!(
            attrs.to_string(),
            "{'href': 'https://example.com', 'target': '_blank'}"
        );
        assert_eq!(Attributes::new().to_string(), "{}");
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut attrs = Attributes::new();
        attrs.insert("id", "main");
        attrs.insert("class", "a");
        attrs.insert("id", "other");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("id"), Some("other"));
        assert_eq!(attrs.to_html(), " id=\"other\" class=\"a\"");
    }
}
