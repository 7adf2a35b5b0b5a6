//! The closed error taxonomy of the parser.
//!
//! Every failure is fatal: the first [`SyntaxError`] raised by a grammar state
//! aborts the parse and surfaces as a [`ParseError`] stamped with the position
//! of the character that was being processed.

use core::fmt;

use thiserror::Error;

use crate::position::Position;

/// Numeric error codes. The numbering is stable and part of the public
/// contract.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// A character that cannot appear in a tag name.
    WrongTagNameCharacter = 1,
    /// A close tag without a name (`</>`).
    EmptyTagName = 2,
    /// An unexpected character directly inside an open tag marker.
    TagMalformed = 3,
    /// A specific character was required and another one was found.
    WrongCharacterGiven = 4,
    /// A close tag with no enclosing open tag, or an unbalanced document.
    SourceDocumentMalformed = 5,
    /// A close tag whose name does not match the open tag.
    WrongCloseTag = 6,
    /// Reserved: attribute without a name.
    AttributeNameEmpty = 7,
    /// Reserved: attribute without a value.
    AttributeValueEmpty = 8,
    /// An attribute value not introduced by a quote character.
    AttributeValueMalformed = 9,
    /// The input ended in the middle of a construct.
    UnexpectedEndOfSource = 10,
    /// The input ended while a block tag was still open.
    UnexpectedEndOfTag = 11,
}

impl ErrorCode {
    /// The numeric value of the code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The message template for this code. Placeholders are written as
    /// `{{name}}` and substituted when the message is rendered.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::WrongTagNameCharacter => "Wrong tag name character: {{char}}",
            Self::EmptyTagName => "Empty tag name",
            Self::TagMalformed => "Tag malformed",
            Self::WrongCharacterGiven => r#"Wrong character given: "{{char}}". "{{await}}" awaits"#,
            Self::SourceDocumentMalformed => "Source document malformed",
            Self::WrongCloseTag => "Wrong close tag: {{tag}}",
            Self::AttributeNameEmpty => "Attribute malformed: empty name",
            Self::AttributeValueEmpty => "Attribute malformed: empty value",
            Self::AttributeValueMalformed => {
                "Attribute value malformed: the attribute value should be a string"
            }
            Self::UnexpectedEndOfSource => "Unexpected end of source",
            Self::UnexpectedEndOfTag => r#"Unexpected end of tag "{{tag}}" ({{line}}:{{column}})"#,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_u8(), f)
    }
}

/// Substitutes every `{{key}}` in `template` with its value. Unknown
/// placeholders are left untouched.
pub(crate) fn render(template: &str, values: &[(&str, &dyn fmt::Display)]) -> String {
    let mut message = String::from(template);
    for (key, value) in values {
        let placeholder = format!("{{{{{key}}}}}");
        if message.contains(&placeholder) {
            message = message.replace(&placeholder, &value.to_string());
        }
    }
    message
}

/// The reason a parse failed, without position information.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// See [`ErrorCode::WrongTagNameCharacter`].
    WrongTagNameCharacter(char),
    /// See [`ErrorCode::EmptyTagName`].
    EmptyTagName,
    /// See [`ErrorCode::TagMalformed`].
    TagMalformed,
    /// See [`ErrorCode::WrongCharacterGiven`].
    WrongCharacterGiven {
        /// The character that was read.
        found: char,
        /// The character the grammar required.
        awaited: char,
    },
    /// See [`ErrorCode::SourceDocumentMalformed`].
    SourceDocumentMalformed,
    /// See [`ErrorCode::WrongCloseTag`]. Carries the name actually found.
    WrongCloseTag(String),
    /// See [`ErrorCode::AttributeNameEmpty`].
    AttributeNameEmpty,
    /// See [`ErrorCode::AttributeValueEmpty`].
    AttributeValueEmpty,
    /// See [`ErrorCode::AttributeValueMalformed`].
    AttributeValueMalformed,
    /// See [`ErrorCode::UnexpectedEndOfSource`].
    UnexpectedEndOfSource,
    /// See [`ErrorCode::UnexpectedEndOfTag`].
    UnexpectedEndOfTag {
        /// Name of the tag left open.
        tag: String,
        /// Position of the tag's `<`.
        opened_at: Position,
    },
}

impl SyntaxError {
    /// The taxonomy code of this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::WrongTagNameCharacter(_) => ErrorCode::WrongTagNameCharacter,
            Self::EmptyTagName => ErrorCode::EmptyTagName,
            Self::TagMalformed => ErrorCode::TagMalformed,
            Self::WrongCharacterGiven { .. } => ErrorCode::WrongCharacterGiven,
            Self::SourceDocumentMalformed => ErrorCode::SourceDocumentMalformed,
            Self::WrongCloseTag(_) => ErrorCode::WrongCloseTag,
            Self::AttributeNameEmpty => ErrorCode::AttributeNameEmpty,
            Self::AttributeValueEmpty => ErrorCode::AttributeValueEmpty,
            Self::AttributeValueMalformed => ErrorCode::AttributeValueMalformed,
            Self::UnexpectedEndOfSource => ErrorCode::UnexpectedEndOfSource,
            Self::UnexpectedEndOfTag { .. } => ErrorCode::UnexpectedEndOfTag,
        }
    }

    /// The human readable message with all placeholders substituted.
    #[must_use]
    pub fn message(&self) -> String {
        let template = self.code().template();
        match self {
            Self::WrongTagNameCharacter(ch) => render(template, &[("char", ch)]),
            Self::WrongCharacterGiven { found, awaited } => {
                render(template, &[("char", found), ("await", awaited)])
            }
            Self::WrongCloseTag(tag) => render(template, &[("tag", tag)]),
            Self::UnexpectedEndOfTag { tag, opened_at } => render(
                template,
                &[
                    ("tag", tag),
                    ("line", &opened_at.line),
                    ("column", &opened_at.column),
                ],
            ),
            _ => String::from(template),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl core::error::Error for SyntaxError {}

/// A failed parse: the [`SyntaxError`] and where it happened.
///
/// The `Display` form is `Error (<code>) on <line>:<column> <message>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error ({}) on {line}:{column} {source}", .source.code())]
pub struct ParseError {
    source: SyntaxError,
    line: usize,
    column: usize,
}

impl ParseError {
    pub(crate) fn new(source: SyntaxError, at: Position) -> Self {
        Self {
            source,
            line: at.line,
            column: at.column,
        }
    }

    /// The taxonomy code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.source.code()
    }

    /// The rendered message, without the code and position prefix.
    #[must_use]
    pub fn message(&self) -> String {
        self.source.message()
    }

    /// The underlying syntax error.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }

    /// 1-based line of the offending character.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the offending character.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Line and column as a [`Position`].
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}
