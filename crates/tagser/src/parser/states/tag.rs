use core::mem;

use super::{
    AttributeState, CLOSE_BRACKET, CloseBracketState, RootState, SLASH, is_name_char,
    is_tag_separator,
};
use crate::{
    error::SyntaxError,
    node::{Attributes, Node},
    parser::{
        effect::Effect,
        frame::malformed,
        message::{Input, Message, Outcome},
    },
    position::Position,
};

/// Inside `<name ...`: collects the name and attributes, then either closes
/// itself (`/>`) or opens a scoped root for the body (`>`).
#[derive(Debug)]
pub(crate) struct TagOpenState {
    opened_at: Position,
    name: String,
    attributes: Attributes,
}

impl TagOpenState {
    pub(crate) fn new(opened_at: Position) -> Self {
        Self {
            opened_at,
            name: String::new(),
            attributes: Attributes::new(),
        }
    }

    pub(crate) fn init(input: Input) -> Effect {
        Effect::push(TagNameState::default()).then(Message::Process(input))
    }

    pub(crate) fn process(&mut self, input: Input) -> Effect {
        let Input::Char(ch) = input else {
            return Effect::fail(SyntaxError::UnexpectedEndOfSource);
        };

        match ch {
            SLASH => Effect::push(CloseBracketState),
            CLOSE_BRACKET => Effect::push(RootState::scoped(self.name.clone(), self.opened_at)),
            ch if is_name_char(ch) => {
                Effect::push(AttributeState::default()).then(Message::Init(input))
            }
            ch if is_tag_separator(ch) => Effect::none(),
            _ => Effect::fail(SyntaxError::TagMalformed),
        }
    }

    pub(crate) fn notify(&mut self, input: Input, outcome: Outcome) -> Effect {
        match outcome {
            Outcome::TagName(name) => {
                self.name = name;
                Effect::followup(Message::Process(input))
            }
            Outcome::Attribute(attribute) => {
                self.attributes
                    .insert(attribute.name().to_owned(), attribute);
                Effect::followup(Message::Process(input))
            }
            Outcome::CloseBracketFound => self.complete(input, Vec::new()),
            Outcome::CloseTag(children) => self.complete(input, children),
            other => malformed("tag open", &other),
        }
    }

    fn complete(&mut self, input: Input, children: Vec<Node>) -> Effect {
        let node = Node::tag(
            mem::take(&mut self.name),
            mem::take(&mut self.attributes),
            children,
            self.opened_at,
        );
        Effect::pop_with(Message::Notify(input, Outcome::Tag(node)))
    }
}

/// Accumulates a tag name for an open or a close tag.
#[derive(Debug, Default)]
pub(crate) struct TagNameState {
    name: String,
}

impl TagNameState {
    pub(crate) fn process(&mut self, input: Input) -> Effect {
        let Input::Char(ch) = input else {
            return Effect::fail(SyntaxError::UnexpectedEndOfSource);
        };

        if is_name_char(ch) {
            self.name.push(ch);
            Effect::none()
        } else if ch == CLOSE_BRACKET || ch == SLASH || is_tag_separator(ch) {
            let name = mem::take(&mut self.name);
            Effect::pop_with(Message::Notify(input, Outcome::TagName(name)))
        } else {
            Effect::fail(SyntaxError::WrongTagNameCharacter(ch))
        }
    }
}
