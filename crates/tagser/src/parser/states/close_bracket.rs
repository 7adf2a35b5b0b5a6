use super::CLOSE_BRACKET;
use crate::{
    error::SyntaxError,
    parser::{
        effect::Effect,
        message::{Input, Message, Outcome},
    },
};

/// After the `/` of a self-closing tag: only `>` may follow.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CloseBracketState;

impl CloseBracketState {
    pub(crate) fn process(input: Input) -> Effect {
        match input {
            Input::Char(CLOSE_BRACKET) => {
                Effect::pop_with(Message::Notify(input, Outcome::CloseBracketFound))
            }
            Input::Char(found) => Effect::fail(SyntaxError::WrongCharacterGiven {
                found,
                awaited: CLOSE_BRACKET,
            }),
            Input::EndOfSource => Effect::fail(SyntaxError::UnexpectedEndOfSource),
        }
    }
}
