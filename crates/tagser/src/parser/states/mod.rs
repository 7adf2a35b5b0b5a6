//! Grammar states. Each state owns only the fields its rule accumulates and
//! answers every message with an [`Effect`](super::effect::Effect).

mod attribute;
mod close_bracket;
mod close_tag;
mod root;
mod tag;

pub(crate) use attribute::{AttributeNameState, AttributeState, AttributeValueState};
pub(crate) use close_bracket::CloseBracketState;
pub(crate) use close_tag::CloseTagState;
pub(crate) use root::RootState;
pub(crate) use tag::{TagNameState, TagOpenState};

pub(crate) const ESCAPE: char = '\\';
pub(crate) const OPEN_BRACKET: char = '<';
pub(crate) const CLOSE_BRACKET: char = '>';
pub(crate) const SLASH: char = '/';
pub(crate) const EQUALS: char = '=';

/// Characters allowed in tag and attribute names, including the first one.
#[inline]
pub(crate) fn is_name_char(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Separators inside tag markup: space and line feed. Tabs and carriage
/// returns are rejected there. Outside of tags all of these are plain text.
#[inline]
pub(crate) fn is_tag_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\n')
}

#[inline]
pub(crate) fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}
