//! Exploding dice.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::DieError;
use crate::options::DieOptions;

/// The outcome of a single exploding roll.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Roll {
    /// Sum of every rolled value.
    pub total: u32,
    /// Each rolled value in order. Never empty.
    pub rolls: Vec<u32>,
}

impl Roll {
    /// Returns whether the roll exploded at least once.
    #[must_use]
    pub fn exploded(&self) -> bool {
        self.rolls.len() > 1
    }
}

/// An exploding die.
///
/// Rolling the highest face rolls again and adds to the same result, for as
/// long as the highest face keeps coming up.
///
/// # Example
///
/// ```
/// use tabletop::{Die, DieOptions};
///
/// let mut die = Die::new(DieOptions::d6(), 3).unwrap();
/// let roll = die.roll();
/// assert_eq!(roll.total, roll.rolls.iter().sum::<u32>());
/// ```
#[derive(Debug, Clone)]
pub struct Die<R = ChaCha8Rng> {
    sides: u32,
    rng: R,
}

impl Die<ChaCha8Rng> {
    /// Creates a die with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`DieError::TooFewSides`] if the die has fewer than two sides.
    pub fn new(options: DieOptions, seed: u64) -> Result<Self, DieError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a die seeded from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`DieError::TooFewSides`] if the die has fewer than two sides.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_entropy(options: DieOptions) -> Result<Self, DieError> {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }
}

impl<R: RngCore> Die<R> {
    /// Creates a die rolling with the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`DieError::TooFewSides`] if the die has fewer than two sides.
    pub fn with_rng(options: DieOptions, rng: R) -> Result<Self, DieError> {
        options.validate()?;
        Ok(Self {
            sides: options.sides,
            rng,
        })
    }

    /// Rolls the die, exploding on the highest face.
    pub fn roll(&mut self) -> Roll {
        let mut rolls = Vec::new();
        let mut total: u32 = 0;

        loop {
            let value = self.rng.random_range(1..=self.sides);
            total = total.saturating_add(value);
            rolls.push(value);
            if value != self.sides {
                break;
            }
        }

        log::trace!("d{} rolled {total} from {rolls:?}", self.sides);
        Roll { total, rolls }
    }
}

impl<R> Die<R> {
    /// Returns the number of sides.
    #[must_use]
    pub const fn sides(&self) -> u32 {
        self.sides
    }
}
