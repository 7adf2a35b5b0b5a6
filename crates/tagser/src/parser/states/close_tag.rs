use super::{CLOSE_BRACKET, TagNameState, is_tag_separator};
use crate::{
    error::SyntaxError,
    parser::{
        context::ParseContext,
        effect::Effect,
        frame::malformed,
        message::{Input, Message, Outcome},
    },
};

/// Inside `</name ...>`: the name must match the tag that opened the
/// enclosing scope.
#[derive(Debug)]
pub(crate) struct CloseTagState {
    expected: String,
}

impl CloseTagState {
    pub(crate) fn new(expected: String) -> Self {
        Self { expected }
    }

    /// The `/` that started the close tag is consumed here.
    pub(crate) fn init() -> Effect {
        Effect::push(TagNameState::default())
    }

    pub(crate) fn process(input: Input) -> Effect {
        let Input::Char(ch) = input else {
            return Effect::fail(SyntaxError::UnexpectedEndOfSource);
        };

        if ch == CLOSE_BRACKET {
            Effect::pop_with(Message::Notify(input, Outcome::CloseTagFound))
        } else if is_tag_separator(ch) {
            Effect::none()
        } else {
            Effect::fail(SyntaxError::WrongCharacterGiven {
                found: ch,
                awaited: CLOSE_BRACKET,
            })
        }
    }

    pub(crate) fn notify(&mut self, input: Input, outcome: Outcome, ctx: &ParseContext) -> Effect {
        match outcome {
            Outcome::TagName(found) if found.is_empty() => Effect::fail(SyntaxError::EmptyTagName),
            Outcome::TagName(found) if !ctx.names_match(&self.expected, &found) => {
                Effect::fail(SyntaxError::WrongCloseTag(found))
            }
            Outcome::TagName(_) => Effect::followup(Message::Process(input)),
            other => malformed("close tag", &other),
        }
    }
}
