use core::mem;

use super::{
    CloseTagState, ESCAPE, OPEN_BRACKET, SLASH, TagOpenState, is_name_char,
};
use crate::{
    error::SyntaxError,
    node::Node,
    parser::{
        context::ParseContext,
        effect::Effect,
        frame::malformed,
        message::{Input, Message, Outcome},
    },
    position::Position,
};

/// The block tag a scoped root belongs to.
#[derive(Debug)]
struct Owner {
    name: String,
    opened_at: Position,
}

/// Text and child collection, either for the whole document or for the body
/// of one block tag.
#[derive(Debug, Default)]
pub(crate) struct RootState {
    owner: Option<Owner>,
    nodes: Vec<Node>,
    text: String,
    /// Position of the first non-whitespace character in `text`.
    text_start: Option<Position>,
    /// Set while the character after a `\` is awaited.
    escape_at: Option<Position>,
    /// Set while the character after a `<` is awaited.
    delimiter_at: Option<Position>,
}

impl RootState {
    pub(crate) fn document() -> Self {
        Self::default()
    }

    pub(crate) fn scoped(name: String, opened_at: Position) -> Self {
        Self {
            owner: Some(Owner { name, opened_at }),
            ..Self::default()
        }
    }

    pub(crate) fn is_document(&self) -> bool {
        self.owner.is_none()
    }

    pub(crate) fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub(crate) fn process(&mut self, input: Input, ctx: &ParseContext) -> Effect {
        let Input::Char(ch) = input else {
            return self.end_of_source();
        };

        if let Some(opened_at) = self.delimiter_at.take() {
            return self.open(ch, opened_at);
        }

        let here = ctx.position;
        if let Some(escape_at) = self.escape_at.take() {
            self.append(ch, escape_at);
        } else if ch == ESCAPE {
            self.escape_at = Some(here);
        } else if ch == OPEN_BRACKET {
            self.flush_text();
            self.delimiter_at = Some(here);
        } else {
            self.append(ch, here);
        }
        Effect::none()
    }

    pub(crate) fn notify(&mut self, input: Input, outcome: Outcome) -> Effect {
        match outcome {
            Outcome::Tag(node) => {
                self.nodes.push(node);
                Effect::none()
            }
            Outcome::CloseTagFound => {
                let children = mem::take(&mut self.nodes);
                Effect::pop_with(Message::Notify(input, Outcome::CloseTag(children)))
            }
            other => malformed("root", &other),
        }
    }

    /// Decides what the character after `<` starts.
    fn open(&self, ch: char, opened_at: Position) -> Effect {
        if is_name_char(ch) {
            return Effect::push(TagOpenState::new(opened_at))
                .then(Message::Init(Input::Char(ch)));
        }
        if ch != SLASH {
            return Effect::fail(SyntaxError::TagMalformed);
        }
        match &self.owner {
            Some(owner) => Effect::push(CloseTagState::new(owner.name.clone()))
                .then(Message::Init(Input::Char(ch))),
            None => Effect::fail(SyntaxError::SourceDocumentMalformed),
        }
    }

    fn end_of_source(&mut self) -> Effect {
        if let Some(owner) = &self.owner {
            return Effect::fail(SyntaxError::UnexpectedEndOfTag {
                tag: owner.name.clone(),
                opened_at: owner.opened_at,
            });
        }
        if self.delimiter_at.is_some() {
            return Effect::fail(SyntaxError::UnexpectedEndOfSource);
        }
        self.flush_text();
        Effect::none()
    }

    fn append(&mut self, ch: char, at: Position) {
        if self.text_start.is_none() && !ch.is_whitespace() {
            self.text_start = Some(at);
        }
        self.text.push(ch);
    }

    fn flush_text(&mut self) {
        // `text_start` is only set once a non-whitespace character arrived,
        // so the trimmed run is never empty here.
        if let Some(start) = self.text_start.take() {
            self.nodes.push(Node::text(self.text.trim().to_owned(), start));
        }
        self.text.clear();
    }
}
