use core::mem;

use super::{EQUALS, is_name_char, is_quote};
use crate::{
    error::SyntaxError,
    node::Attribute,
    parser::{
        effect::Effect,
        frame::malformed,
        message::{Input, Message, Outcome},
    },
};

/// One `name` or `name="value"` inside an open tag.
#[derive(Debug, Default)]
pub(crate) struct AttributeState {
    name: String,
    value: Option<String>,
}

impl AttributeState {
    pub(crate) fn init(input: Input) -> Effect {
        Effect::push(AttributeNameState::default()).then(Message::Process(input))
    }

    pub(crate) fn process(&mut self, input: Input) -> Effect {
        let Input::Char(ch) = input else {
            return Effect::fail(SyntaxError::UnexpectedEndOfSource);
        };

        if ch == EQUALS && self.value.is_none() {
            return Effect::push(AttributeValueState::default());
        }

        // Anything else ends the attribute and belongs to the enclosing tag.
        let value = self
            .value
            .take()
            .unwrap_or_else(|| Attribute::BOOLEAN_SHORTHAND.to_owned());
        let attribute = Attribute::new(mem::take(&mut self.name), value);
        Effect::pop_with(Message::Notify(input, Outcome::Attribute(attribute)))
    }

    pub(crate) fn notify(&mut self, input: Input, outcome: Outcome) -> Effect {
        match outcome {
            Outcome::AttributeName(name) => {
                self.name = name;
                Effect::followup(Message::Process(input))
            }
            // The closing quote is consumed.
            Outcome::AttributeValue(value) => {
                self.value = Some(value);
                Effect::none()
            }
            other => malformed("attribute", &other),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct AttributeNameState {
    name: String,
}

impl AttributeNameState {
    pub(crate) fn process(&mut self, input: Input) -> Effect {
        let Input::Char(ch) = input else {
            return Effect::fail(SyntaxError::UnexpectedEndOfSource);
        };

        if is_name_char(ch) {
            self.name.push(ch);
            return Effect::none();
        }
        let name = mem::take(&mut self.name);
        Effect::pop_with(Message::Notify(input, Outcome::AttributeName(name)))
    }
}

/// A quoted value. There is no escaping: the value ends at the first
/// recurrence of its opening quote.
#[derive(Debug, Default)]
pub(crate) struct AttributeValueState {
    quote: Option<char>,
    value: String,
}

impl AttributeValueState {
    pub(crate) fn process(&mut self, input: Input) -> Effect {
        let Input::Char(ch) = input else {
            return Effect::fail(SyntaxError::UnexpectedEndOfSource);
        };

        match self.quote {
            None if is_quote(ch) => {
                self.quote = Some(ch);
                Effect::none()
            }
            None => Effect::fail(SyntaxError::AttributeValueMalformed),
            Some(quote) if ch == quote => {
                let value = mem::take(&mut self.value);
                Effect::pop_with(Message::Notify(input, Outcome::AttributeValue(value)))
            }
            Some(_) => {
                self.value.push(ch);
                Effect::none()
            }
        }
    }
}
