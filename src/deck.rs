//! Deck state and card drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, compare, full_deck};
use crate::error::DrawError;
use crate::options::DeckOptions;

/// A 54-card deck that draws uniformly at random from its undrawn cards.
///
/// The deck owns its random source. Nothing is shared between decks, so two
/// decks only produce the same draws when built from the same seed. A deck is
/// meant for single-threaded use; wrap it in a lock to share it.
///
/// Cards leave the deck when drawn and only come back on [`Deck::shuffle`].
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Undrawn cards, in no particular order.
    cards: Vec<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a full deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::{Deck, DeckOptions};
    ///
    /// let mut a = Deck::new(DeckOptions::default(), 7);
    /// let mut b = Deck::new(DeckOptions::default(), 7);
    /// assert_eq!(a.draw_card(), b.draw_card());
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full deck seeded from operating system entropy.
    ///
    /// Every call draws a fresh seed, so decks built at the same instant still
    /// deal differently.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: DeckOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }
}

#[cfg(feature = "std")]
impl Default for Deck<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_entropy(DeckOptions::default())
    }
}

impl<R: RngCore> Deck<R> {
    /// Creates a full deck drawing from the given random source.
    pub fn with_rng(options: DeckOptions, rng: R) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            options,
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Refills the deck with all 54 cards.
    ///
    /// The cards are not permuted here: every draw picks a random position,
    /// so the order of the undrawn cards does not matter.
    pub fn shuffle(&mut self) {
        self.cards.clear();
        self.cards.extend(full_deck());
        log::debug!("deck refilled with {} cards", self.cards.len());
    }

    /// Draws a random card and removes it from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left. The deck is not
    /// refilled automatically; call [`Deck::shuffle`] to continue.
    pub fn draw_card(&mut self) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = self.rng.random_range(0..self.cards.len());
        let card = self.cards.swap_remove(index);
        log::trace!("drew {card}, {} cards left", self.cards.len());
        Ok(card)
    }

    /// Draws `count` cards and returns them sorted by [`compare`].
    ///
    /// When `allow_reshuffle` is set and the deck runs out part way through,
    /// it is refilled and drawing continues. The refilled deck may hand out
    /// cards that are already in the returned hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InsufficientCards`] without drawing anything if
    /// `count` exceeds the cards left and `allow_reshuffle` is not set.
    pub fn draw_many(
        &mut self,
        count: usize,
        allow_reshuffle: bool,
    ) -> Result<Vec<Card>, DrawError> {
        let remaining = self.cards.len();
        if count > remaining && !allow_reshuffle {
            return Err(DrawError::InsufficientCards {
                requested: count,
                remaining,
            });
        }

        let mut hand = Vec::with_capacity(count);
        while hand.len() < count {
            if self.cards.is_empty() {
                log::debug!(
                    "deck exhausted with {} of {count} cards drawn, reshuffling",
                    hand.len()
                );
                self.shuffle();
            }

            match self.draw_card() {
                Ok(card) => hand.push(card),
                Err(err) => {
                    log::warn!("draw failed after {} of {count} cards: {err}", hand.len());
                    return Err(err);
                }
            }
        }

        hand.sort_by(compare);
        Ok(hand)
    }

    /// Draws a hand of `count` cards, reshuffling on exhaustion if the deck
    /// options allow it.
    ///
    /// # Errors
    ///
    /// See [`Deck::draw_many`].
    pub fn draw_hand(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        self.draw_many(count, self.options.reshuffle_on_exhaustion)
    }
}

impl<R> Deck<R> {
    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the undrawn cards, in no particular order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }
}
