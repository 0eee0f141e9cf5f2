//! Isolated scratch container for built markup.

use crate::element::Node;

/// An ordered collection of nodes built outside any parent element.
///
/// Views build each layout region into its own `Fragment` so the rendered
/// markup can be spliced inline into the document and registered into a
/// named slot without rebuilding the region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    /// Create an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// True when no nodes have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render all nodes in insertion order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        for node in &self.nodes {
            match node {
                Node::Element(element) => element.write_to(&mut out),
                Node::Text(text) => out.push_str(&crate::escape_html(text)),
                Node::Raw(markup) => out.push_str(markup),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Element;

    #[test]
    fn test_empty_fragment_renders_empty() {
        assert_eq!(Fragment::new().render(), "");
        assert!(Fragment::new().is_empty());
    }

    #[test]
    fn test_fragment_preserves_insertion_order() {
        let mut fragment = Fragment::new();
        fragment.push(Element::new("h1").text("Title"));
        fragment.push(Element::new("p").text("Body"));
        assert_eq!(fragment.render(), "<h1>Title</h1><p>Body</p>");
    }

    #[test]
    fn test_fragment_escapes_text_nodes() {
        let mut fragment = Fragment::new();
        fragment.push(Node::text("a & b"));
        assert_eq!(fragment.render(), "a &amp; b");
    }

    #[test]
    fn test_fragment_passes_raw_through() {
        let mut fragment = Fragment::new();
        fragment.push(Node::raw("<nav>done</nav>"));
        assert_eq!(fragment.render(), "<nav>done</nav>");
    }
}
