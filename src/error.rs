//! Error types for deck construction.

use thiserror::Error;

/// Errors that can occur while configuring a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A deck or joker count was negative.
    #[error("count must not be negative (got {0})")]
    NegativeCount(i64),
    /// A count does not fit in `usize` on this platform.
    #[error("count {0} is too large")]
    CountTooLarge(i64),
    /// Both shuffling and sorting were requested.
    #[error("cannot both shuffle and sort a deck")]
    ConflictingOrder,
}
