//! A parser for a minimal angle-bracket tag markup.
//!
//! The markup knows three constructs: text, block tags
//! (`<name attr="v">...</name>`) and self-closing tags (`<name/>`). There are
//! no comments, declarations, processing instructions or entities; the only
//! escape is a backslash in text, which makes the next character literal.
//!
//! ```rust
//! use tagser::{NodeKind, parse};
//!
//! let nodes = parse(r#"Total: <cell width="3" bold>{{sum}}</cell>"#).unwrap();
//! assert_eq!(nodes.len(), 2);
//! assert_eq!(nodes[0].kind(), NodeKind::Text);
//! assert_eq!(nodes[0].body(), "Total:");
//!
//! let cell = &nodes[1];
//! assert_eq!(cell.name(), "cell");
//! assert_eq!(cell.attribute_value("bold"), Some("true"));
//! assert_eq!((cell.line(), cell.column()), (1, 8));
//! ```
//!
//! Errors carry a stable numeric code and the position of the offending
//! character:
//!
//! ```rust
//! let err = tagser::parse("<tag>").unwrap_err();
//! assert_eq!(err.to_string(), r#"Error (11) on 1:5 Unexpected end of tag "tag" (1:1)"#);
//! ```
//!
//! The parser keeps its own stack of grammar states instead of recursing, so
//! deeply nested input cannot overflow the call stack.

mod error;
mod markup;
mod node;
mod options;
mod parser;
mod position;

#[cfg(test)]
mod tests;

pub use error::{ErrorCode, ParseError, SyntaxError};
pub use markup::{to_markup, write_markup};
pub use node::{Attribute, Attributes, Node, NodeKind};
pub use options::ParserOptions;
pub use parser::Parser;
pub use position::Position;

/// Parses `source` with default options.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    Parser::default().parse(source)
}
