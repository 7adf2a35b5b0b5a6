//! Source positions and the cursor that tracks them.

use core::fmt;

/// A 1-based line/column location in the source text.
///
/// Positions order lexicographically (line first, then column), which is the
/// document order of the characters they point at.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number within the line, starting at 1. Counted in characters.
    pub column: usize,
}

impl Position {
    /// The first character of a document.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Creates a position from a 1-based line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Running line/column bookkeeping for the driver.
///
/// The cursor always points at the character about to be dispatched. A line
/// feed belongs to the line it terminates; the character after it starts the
/// next line at column 1.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor {
    line: usize,
    column: usize,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self { line: 1, column: 1 }
    }

    #[inline]
    pub(crate) fn position(self) -> Position {
        Position::new(self.line, self.column)
    }

    #[inline]
    pub(crate) fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}
