//! Markup parser built on an explicit stack of grammar frames.
//!
//! Overview
//! - Every grammar rule is a frame: a small state struct that owns only what
//!   that rule accumulates (a name, a quoted value, the children of a tag
//!   body). Frames live on a `Vec<Frame>`; nesting depth is bounded by the
//!   heap, never by the call stack.
//! - The driver walks the source one `char` at a time and hands each
//!   character to the top frame as a `Process` message. After the last
//!   character a synthetic end-of-source input is dispatched the same way.
//! - A frame answers with an `Effect`: optionally pop itself, optionally push
//!   a new frame, optionally continue with a follow-up message to whichever
//!   frame is on top afterwards, optionally report a syntax error.
//!
//! Messages
//! - `Init(input)` primes a freshly pushed frame with the character that
//!   caused the push, so a tag name starts with the character right after `<`.
//! - `Process(input)` is the next input character.
//! - `Notify(input, outcome)` carries a finished sub-result to the parent
//!   frame together with the character that terminated the child. The parent
//!   usually re-dispatches that character to itself, which is how a single
//!   character can end a name and also start the next rule.
//!
//! Errors
//! - An error without a follow-up aborts the parse immediately.
//! - An error with a follow-up is held until the chain of follow-ups for the
//!   current character has run; the most recent one is reported.
//! - Positions are those of the character being dispatched. End of source
//!   reuses the position of the last character (`1:1` for empty input).

mod context;
mod effect;
mod frame;
mod message;
mod states;

use tracing::{debug, trace};

use self::{
    context::ParseContext,
    frame::Frame,
    message::{Input, Message},
    states::RootState,
};
use crate::{
    error::{ParseError, SyntaxError},
    node::Node,
    options::ParserOptions,
    position::Cursor,
};

/// Parses markup source into a tree of [`Node`]s.
///
/// A `Parser` only holds options; every call to [`Parser::parse`] starts
/// from a fresh state, so one parser can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use tagser::Parser;
///
/// let nodes = Parser::default()
///     .parse(r#"<cell width="3">total</cell>"#)
///     .unwrap();
/// assert_eq!(nodes[0].attribute_value("width"), Some("3"));
/// assert_eq!(nodes[0].children()[0].body(), "total");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Options applied to subsequent parses.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Mutable access to the options, e.g. to toggle `ignore_case` between
    /// calls.
    pub fn options_mut(&mut self) -> &mut ParserOptions {
        &mut self.options
    }

    /// Parses a complete source document.
    ///
    /// Empty or whitespace-only input yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error found, with the line and column of the
    /// character that triggered it.
    pub fn parse(&self, source: &str) -> Result<Vec<Node>, ParseError> {
        Machine::new(self.options).run(source)
    }
}

/// One parse in progress.
struct Machine {
    stack: Vec<Frame>,
    context: ParseContext,
}

impl Machine {
    fn new(options: ParserOptions) -> Self {
        Self {
            stack: vec![Frame::Root(RootState::document())],
            context: ParseContext::new(options),
        }
    }

    fn run(mut self, source: &str) -> Result<Vec<Node>, ParseError> {
        let mut cursor = Cursor::new();
        for ch in source.chars() {
            self.context.position = cursor.position();
            self.dispatch(Message::Process(Input::Char(ch)))?;
            cursor.advance(ch);
        }
        trace!(position = %self.context.position, "end of source");
        self.dispatch(Message::Process(Input::EndOfSource))?;
        self.finish()
    }

    fn dispatch(&mut self, message: Message) -> Result<(), ParseError> {
        let mut next = Some(message);
        let mut deferred = None;

        while let Some(message) = next.take() {
            let Some(frame) = self.stack.last_mut() else {
                unreachable!(
                    "malformed state machine: {} message with an empty stack",
                    message.kind()
                );
            };
            let effect = frame.handle(message, &self.context);

            if effect.pop {
                if let Some(frame) = self.stack.pop() {
                    trace!(depth = self.stack.len(), frame = frame.name(), "pop");
                }
            }
            if let Some(frame) = effect.push {
                trace!(depth = self.stack.len(), frame = frame.name(), "push");
                self.stack.push(frame);
            }
            next = effect.followup;

            // No state pairs an error with a follow-up today; if one does, the
            // follow-ups still run and the latest error is reported.
            if let Some(error) = effect.error {
                if next.is_none() {
                    return Err(self.syntax_error(error));
                }
                deferred = Some(error);
            }
        }

        match deferred {
            Some(error) => Err(self.syntax_error(error)),
            None => Ok(()),
        }
    }

    /// Unwinds the document root. Anything else left on the stack means a
    /// construct was never closed.
    fn finish(mut self) -> Result<Vec<Node>, ParseError> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(Frame::Root(root)), true) if root.is_document() => {
                let nodes = root.into_nodes();
                debug!(nodes = nodes.len(), "parsed document");
                Ok(nodes)
            }
            _ => Err(self.syntax_error(SyntaxError::SourceDocumentMalformed)),
        }
    }

    fn syntax_error(&self, err: SyntaxError) -> ParseError {
        let err = ParseError::new(err, self.context.position);
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.context.options.panic_on_error, "{err}");
        debug!(
            code = err.code().as_u8(),
            line = err.line(),
            column = err.column(),
            "syntax error"
        );
        err
    }
}
