use crate::node::{Attribute, Node};

/// One unit of input as seen by a grammar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Char(char),
    /// Synthetic marker dispatched once after the last character.
    EndOfSource,
}

/// A completed sub-result bubbled from a popped frame to its parent.
#[derive(Debug)]
pub(crate) enum Outcome {
    TagName(String),
    AttributeName(String),
    AttributeValue(String),
    Attribute(Attribute),
    /// `>` after a self-closing `/`.
    CloseBracketFound,
    /// A matching `</name>` was read; its `>` is consumed.
    CloseTagFound,
    /// Children collected by a scoped root, handed to the owning tag.
    CloseTag(Vec<Node>),
    Tag(Node),
}

/// Event exchanged between the driver and the frames.
#[derive(Debug)]
pub(crate) enum Message {
    /// Primes a freshly pushed frame with the character that caused the push.
    Init(Input),
    /// The next input character.
    Process(Input),
    /// A child frame finished. `Input` is the character that ended it.
    Notify(Input, Outcome),
}

impl Message {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Message::Init(_) => "init",
            Message::Process(_) => "process",
            Message::Notify(..) => "notify",
        }
    }
}
