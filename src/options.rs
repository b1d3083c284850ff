//! Deck and dice configuration options.

use crate::error::DieError;

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tabletop::DeckOptions;
///
/// let options = DeckOptions::default().with_reshuffle_on_exhaustion(false);
/// assert!(!options.reshuffle_on_exhaustion);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Whether [`Deck::draw_hand`](crate::Deck::draw_hand) refills the deck
    /// when it runs out part way through a hand.
    pub reshuffle_on_exhaustion: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            reshuffle_on_exhaustion: true,
        }
    }
}

impl DeckOptions {
    /// Sets whether hands reshuffle the deck when it runs out.
    ///
    /// # Example
    ///
    /// ```
    /// use tabletop::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_reshuffle_on_exhaustion(true);
    /// assert!(options.reshuffle_on_exhaustion);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_on_exhaustion(mut self, reshuffle: bool) -> Self {
        self.reshuffle_on_exhaustion = reshuffle;
        self
    }
}

/// Configuration options for an exploding die.
///
/// ```
/// use tabletop::DieOptions;
///
/// let options = DieOptions::d6().with_sides(10);
/// assert_eq!(options, DieOptions::d10());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DieOptions {
    /// Number of faces. The highest face explodes.
    pub sides: u32,
}

impl Default for DieOptions {
    fn default() -> Self {
        Self::d6()
    }
}

impl DieOptions {
    /// A four-sided die.
    #[must_use]
    pub const fn d4() -> Self {
        Self { sides: 4 }
    }

    /// A six-sided die.
    #[must_use]
    pub const fn d6() -> Self {
        Self { sides: 6 }
    }

    /// An eight-sided die.
    #[must_use]
    pub const fn d8() -> Self {
        Self { sides: 8 }
    }

    /// A ten-sided die.
    #[must_use]
    pub const fn d10() -> Self {
        Self { sides: 10 }
    }

    /// A twelve-sided die.
    #[must_use]
    pub const fn d12() -> Self {
        Self { sides: 12 }
    }

    /// A twenty-sided die.
    #[must_use]
    pub const fn d20() -> Self {
        Self { sides: 20 }
    }

    /// Sets the number of sides.
    #[must_use]
    pub const fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Checks that the die can be rolled.
    ///
    /// # Errors
    ///
    /// Returns [`DieError::TooFewSides`] if the die has fewer than two sides.
    pub const fn validate(&self) -> Result<(), DieError> {
        if self.sides < 2 {
            return Err(DieError::TooFewSides { sides: self.sides });
        }
        Ok(())
    }
}
