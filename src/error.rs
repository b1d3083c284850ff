//! Error types for deck and dice operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("cannot draw cards from an empty deck")]
    EmptyDeck,
    /// More cards were requested than remain and reshuffling was disallowed.
    #[error("deck does not contain enough cards to draw ({requested} requested, {remaining} remaining)")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

impl DrawError {
    /// Returns the placeholder card associated with the failure.
    ///
    /// This is always [`Card::SENTINEL`]: never valid, and equal to every card
    /// under [`compare`](crate::card::compare). It must not be played.
    #[must_use]
    pub const fn card(&self) -> Card {
        Card::SENTINEL
    }
}

/// Errors that can occur when configuring a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DieError {
    /// The die has fewer than two sides and would explode forever.
    #[error("a die needs at least 2 sides, got {sides}")]
    TooFewSides {
        /// The rejected side count.
        sides: u32,
    },
}
