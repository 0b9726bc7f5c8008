use crate::{affix, MIN_MIN_COUNT};
use thiserror::Error;

/// The first rule an [`ArrayDecorator`](crate::ArrayDecorator) configuration
/// breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("minimum count must be at least {}", MIN_MIN_COUNT)]
    MinCountTooLow,
    #[error("minimum count must not exceed maximum count")]
    MinCountAboveMax,
    #[error(transparent)]
    Affix(#[from] affix::Error),
}

impl Error {
    /// Message identifier for localized lookup.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::MinCountTooLow => "array.error.min_count_too_low",
            Self::MinCountAboveMax => "array.error.min_count_above_max",
            Self::Affix(error) => error.key(),
        }
    }
}
