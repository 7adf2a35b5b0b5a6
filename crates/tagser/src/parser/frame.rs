use core::fmt;

use super::{
    context::ParseContext,
    effect::Effect,
    message::Message,
    states::{
        AttributeNameState, AttributeState, AttributeValueState, CloseBracketState, CloseTagState,
        RootState, TagNameState, TagOpenState,
    },
};

/// One entry of the parse stack. Only the top frame receives messages.
#[derive(Debug)]
pub(crate) enum Frame {
    Root(RootState),
    TagOpen(TagOpenState),
    TagName(TagNameState),
    CloseTagOpen(CloseTagState),
    Attribute(AttributeState),
    AttributeName(AttributeNameState),
    AttributeValue(AttributeValueState),
    CloseBracketAwait(CloseBracketState),
}

macro_rules! impl_from_state {
    ($($state:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$state> for Frame {
                fn from(state: $state) -> Self {
                    Frame::$variant(state)
                }
            }
        )*
    };
}

impl_from_state! {
    RootState => Root,
    TagOpenState => TagOpen,
    TagNameState => TagName,
    CloseTagState => CloseTagOpen,
    AttributeState => Attribute,
    AttributeNameState => AttributeName,
    AttributeValueState => AttributeValue,
    CloseBracketState => CloseBracketAwait,
}

impl Frame {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Frame::Root(_) => "root",
            Frame::TagOpen(_) => "tag open",
            Frame::TagName(_) => "tag name",
            Frame::CloseTagOpen(_) => "close tag",
            Frame::Attribute(_) => "attribute",
            Frame::AttributeName(_) => "attribute name",
            Frame::AttributeValue(_) => "attribute value",
            Frame::CloseBracketAwait(_) => "close bracket",
        }
    }

    /// Routes a message to the state behind this frame.
    ///
    /// # Panics
    ///
    /// A message kind a state has no rule for means the transitions
    /// themselves are inconsistent, not that the input is bad.
    pub(crate) fn handle(&mut self, message: Message, ctx: &ParseContext) -> Effect {
        use Message::{Init, Notify, Process};

        match (self, message) {
            (Frame::Root(state), Process(input)) => state.process(input, ctx),
            (Frame::Root(state), Notify(input, outcome)) => state.notify(input, outcome),

            (Frame::TagOpen(_), Init(input)) => TagOpenState::init(input),
            (Frame::TagOpen(state), Process(input)) => state.process(input),
            (Frame::TagOpen(state), Notify(input, outcome)) => state.notify(input, outcome),

            (Frame::TagName(state), Process(input)) => state.process(input),

            (Frame::CloseTagOpen(_), Init(_)) => CloseTagState::init(),
            (Frame::CloseTagOpen(_), Process(input)) => CloseTagState::process(input),
            (Frame::CloseTagOpen(state), Notify(input, outcome)) => {
                state.notify(input, outcome, ctx)
            }

            (Frame::Attribute(_), Init(input)) => AttributeState::init(input),
            (Frame::Attribute(state), Process(input)) => state.process(input),
            (Frame::Attribute(state), Notify(input, outcome)) => state.notify(input, outcome),

            (Frame::AttributeName(state), Process(input)) => state.process(input),
            (Frame::AttributeValue(state), Process(input)) => state.process(input),
            (Frame::CloseBracketAwait(_), Process(input)) => CloseBracketState::process(input),

            (frame, message) => malformed(frame.name(), &message.kind()),
        }
    }
}

#[cold]
#[track_caller]
pub(crate) fn malformed(frame: &str, message: &dyn fmt::Debug) -> ! {
    unreachable!("malformed state machine: {frame} cannot accept {message:?} message")
}
