//! Element tree with a consuming builder API.
//!
//! An [`Element`] owns its children, so the tree is acyclic by construction.
//! Rendering is a pure recursive walk: no interior mutation, the same tree
//! always produces identical markup.

use std::fmt::Write;

use crate::render::{VOID_ELEMENTS, escape_html};

/// A node in the markup tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Text content, escaped on render.
    Text(String),
    /// Pre-rendered markup inserted verbatim. Callers are responsible for
    /// only passing markup produced by a trusted render pass.
    Raw(String),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a raw markup node.
    #[must_use]
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An HTML element with id, classes, attributes, and child nodes.
///
/// Builder methods consume and return `self` so trees are written as nested
/// expressions. The class list deduplicates and preserves first-seen order;
/// other attributes render in insertion order after id and class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class (deduplicated).
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Add a class in place (deduplicated).
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child, escaped on render.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append pre-rendered markup verbatim.
    #[must_use]
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    /// The tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Space-joined class list, in first-seen order.
    #[must_use]
    pub fn class_names(&self) -> String {
        self.classes.join(" ")
    }

    /// True when this tag renders without a closing tag.
    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Render the element and its subtree to a markup string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_to(&mut out);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(ref id) = self.id {
            let _ = write!(out, r#" id="{}""#, escape_html(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, r#" class="{}""#, escape_html(&self.class_names()));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, r#" {name}="{}""#, escape_html(value));
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        for node in &self.children {
            match node {
                Node::Element(element) => element.write_to(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Raw(markup) => out.push_str(markup),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}
