//! A playing-card deck and exploding dice for tabletop games, with optional
//! `no_std` support.
//!
//! The crate provides a [`Deck`] that draws uniformly at random from the
//! standard 54-card composition (52 cards plus two Jokers), the [`Card`]
//! model with its ordering rules, and an exploding [`Die`].
//!
//! # Example
//!
//! ```no_run
//! use tabletop::{Deck, DeckOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! let hand = deck.draw_many(5, true).unwrap();
//! for card in &hand {
//!     println!("{card}");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod dice;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, JOKER, KING, QUEEN, Suit, compare, full_deck};
pub use deck::Deck;
pub use dice::{Die, Roll};
pub use error::{DieError, DrawError};
pub use options::{DeckOptions, DieOptions};
