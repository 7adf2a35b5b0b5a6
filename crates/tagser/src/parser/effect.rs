use super::{frame::Frame, message::Message};
use crate::error::SyntaxError;

/// What a frame asks the driver to do after handling one message.
///
/// Applied in field order: pop, push, dispatch `followup` to the new top,
/// then abort with `error` if present.
#[derive(Debug, Default)]
#[must_use]
pub(crate) struct Effect {
    pub(crate) pop: bool,
    pub(crate) push: Option<Frame>,
    pub(crate) followup: Option<Message>,
    pub(crate) error: Option<SyntaxError>,
}

impl Effect {
    #[inline]
    pub(crate) fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(frame: impl Into<Frame>) -> Self {
        Self {
            push: Some(frame.into()),
            ..Self::default()
        }
    }

    /// Pops the current frame and hands `message` to the parent.
    #[inline]
    pub(crate) fn pop_with(message: Message) -> Self {
        Self {
            pop: true,
            followup: Some(message),
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn followup(message: Message) -> Self {
        Self {
            followup: Some(message),
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn fail(error: SyntaxError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn then(mut self, message: Message) -> Self {
        self.followup = Some(message);
        self
    }
}
