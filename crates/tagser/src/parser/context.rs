use crate::{options::ParserOptions, position::Position};

/// Per-call state visible to every frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext {
    pub(crate) options: ParserOptions,
    /// Position of the input currently being dispatched. Updated by the
    /// driver before each character.
    pub(crate) position: Position,
}

impl ParseContext {
    pub(crate) fn new(options: ParserOptions) -> Self {
        Self {
            options,
            position: Position::START,
        }
    }

    /// Compares a close-tag name with the name of its open tag.
    pub(crate) fn names_match(&self, opened: &str, closed: &str) -> bool {
        if self.options.ignore_case {
            opened.eq_ignore_ascii_case(closed)
        } else {
            opened == closed
        }
    }
}
