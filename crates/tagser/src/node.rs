//! The parse result: a tree of tag and text nodes.
//!
//! Nodes are built by the grammar states and handed out read-only. A node owns
//! its children and its attribute map; nothing else points into it.
//!
//! # Examples
//!
//! ```
//! use tagser::{NodeKind, parse};
//!
//! let nodes = parse(r#"<cell width="3">{{quantity}}</cell>"#).unwrap();
//! let cell = &nodes[0];
//! assert_eq!(cell.kind(), NodeKind::Tag);
//! assert_eq!(cell.attribute_value("width"), Some("3"));
//! assert_eq!(cell.attribute_value("align"), None);
//! assert_eq!(cell.children()[0].body(), "{{quantity}}");
//! ```

use indexmap::IndexMap;

use crate::position::Position;

/// Attribute map of a tag, keyed by attribute name in source order.
///
/// Inserting a name that is already present replaces the value in place, so
/// the last occurrence in the source wins while keeping the first
/// occurrence's slot.
pub type Attributes = IndexMap<String, Attribute>;

/// Whether a [`Node`] is a tag or a run of text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `<name ...>...</name>` or `<name .../>`.
    Tag,
    /// Literal text between tags, trimmed.
    Text,
}

/// A single `name="value"` pair on a tag.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Value given to attributes written without `=value`.
    pub const BOOLEAN_SHORTHAND: &'static str = "true";

    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute name. Never empty.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value between the quotes, or `"true"` for the boolean
    /// shorthand.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A tag or text node.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    body: String,
    children: Vec<Node>,
    attributes: Attributes,
    position: Position,
}

impl Node {
    pub(crate) fn tag(
        name: String,
        attributes: Attributes,
        children: Vec<Node>,
        position: Position,
    ) -> Self {
        Self {
            name,
            kind: NodeKind::Tag,
            body: String::new(),
            children,
            attributes,
            position,
        }
    }

    pub(crate) fn text(body: String, position: Position) -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::Text,
            body,
            children: Vec::new(),
            attributes: Attributes::new(),
            position,
        }
    }

    /// Tag name; empty for text nodes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag or text.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns `true` if this is a [`NodeKind::Tag`] node.
    #[must_use]
    pub fn is_tag(&self) -> bool {
        matches!(self.kind, NodeKind::Tag)
    }

    /// Returns `true` if this is a [`NodeKind::Text`] node.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text)
    }

    /// Text payload with escapes resolved; empty for tags.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Child nodes in document order. Always empty for text nodes and
    /// self-closing tags.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// All attributes in source order.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Looks up one attribute by exact name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Value of the named attribute, or `None` if the tag does not carry it.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute(name).map(Attribute::value)
    }

    /// Position of the node's opening delimiter: the `<` of a tag, or the
    /// first retained character of a text run.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// 1-based line of [`Node::position`].
    #[must_use]
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based column of [`Node::position`].
    #[must_use]
    pub fn column(&self) -> usize {
        self.position.column
    }
}
