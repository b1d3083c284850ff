//! Card types, ordering, and the canonical deck composition.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;
/// Rank of an Ace.
pub const ACE: u8 = 14;
/// Rank of a Joker.
pub const JOKER: u8 = 15;

/// Number of cards in a full deck, Jokers included.
pub const DECK_SIZE: usize = 54;

const MIN_RANK: u8 = 2;

// Indexed by rank - 2.
const RANK_NAMES: [&str; 14] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace", "Joker",
];

/// Card suit.
///
/// The discriminant is the suit index stored in [`Card::suit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 0,
    /// Hearts.
    Hearts = 1,
    /// Diamonds.
    Diamonds = 2,
    /// Clubs.
    Clubs = 3,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit for an index, or `None` if the index is out of range.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Hearts),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

/// A playing card.
///
/// Ranks run from 2 to [`ACE`] (14), with [`JOKER`] (15) above. A Joker's suit
/// only tells the two Jokers apart: Spades is the Black Joker and Hearts the
/// Red Joker.
///
/// A sleeved card is a face-down placeholder. It compares equal to every
/// other card under [`compare`], which is why `Card` does not implement
/// [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (2-10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace, 15 = Joker).
    pub rank: u8,
    /// The suit index (0 = Spades, 1 = Hearts, 2 = Diamonds, 3 = Clubs).
    pub suit: u8,
    /// Whether the card is sleeved.
    pub sleeved: bool,
}

impl Card {
    /// The Black Joker.
    pub const BLACK_JOKER: Self = Self::new(Suit::Spades, JOKER);

    /// The Red Joker.
    pub const RED_JOKER: Self = Self::new(Suit::Hearts, JOKER);

    /// The card handed out alongside an empty-deck error.
    ///
    /// Rank and suit are one past their valid ranges and the card is sleeved,
    /// so it is never valid and compares equal to anything.
    pub const SENTINEL: Self = Self::from_raw(JOKER + 1, 4, true);

    /// Creates a new unsleeved card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=15
    /// are accepted but the card will not pass [`Card::is_valid`].
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            rank,
            suit: suit.index(),
            sleeved: false,
        }
    }

    /// Creates a card from raw field values without any validation.
    #[must_use]
    pub const fn from_raw(rank: u8, suit: u8, sleeved: bool) -> Self {
        Self {
            rank,
            suit,
            sleeved,
        }
    }

    /// Returns a sleeved copy of this card.
    #[must_use]
    pub const fn sleeve(self) -> Self {
        Self {
            sleeved: true,
            ..self
        }
    }

    /// Returns the suit, or `None` if the suit index is out of range.
    #[must_use]
    pub const fn suit_kind(&self) -> Option<Suit> {
        Suit::from_index(self.suit)
    }

    /// Returns whether the rank and suit are within their valid ranges.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rank >= MIN_RANK && self.rank <= JOKER && self.suit <= Suit::Clubs.index()
    }

    /// Returns whether the card is a Joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER
    }

    /// Returns whether the suit is Hearts or Diamonds.
    ///
    /// This also applies to Jokers: the Hearts Joker is red.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit == Suit::Hearts.index() || self.suit == Suit::Diamonds.index()
    }

    /// Returns whether the card may be dropped, which holds for everything
    /// except deuces and Jokers.
    #[must_use]
    pub const fn is_droppable(&self) -> bool {
        self.rank != 2 && self.rank != JOKER
    }

    const fn is_black_joker(&self) -> bool {
        self.is_joker() && !self.is_red()
    }

    /// Compares two cards. See [`compare`].
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        compare(self, other)
    }

    /// Returns the display name of the card.
    ///
    /// Equivalent to `card.to_string()`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

/// Compares two cards.
///
/// The rules apply in order:
///
/// 1. If either card is sleeved, or both share rank and suit, they are equal.
/// 2. The Black Joker is lower than everything else.
/// 3. Otherwise the higher rank wins. The Red Joker has no special case and
///    ranks above Aces.
/// 4. On equal rank the lower suit index wins, so Spades beat Hearts beat
///    Diamonds beat Clubs.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use tabletop::{ACE, Card, Suit, compare};
///
/// let ace = Card::new(Suit::Clubs, ACE);
/// assert_eq!(compare(&Card::BLACK_JOKER, &ace), Ordering::Less);
/// assert_eq!(compare(&Card::RED_JOKER, &ace), Ordering::Greater);
/// assert_eq!(compare(&ace.sleeve(), &Card::RED_JOKER), Ordering::Equal);
/// ```
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    if a.sleeved || b.sleeved || (a.rank == b.rank && a.suit == b.suit) {
        return Ordering::Equal;
    }
    if a.is_black_joker() {
        return Ordering::Less;
    }
    if b.is_black_joker() {
        return Ordering::Greater;
    }

    a.rank.cmp(&b.rank).then_with(|| b.suit.cmp(&a.suit))
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Invalid Card (rank {}, suit {})", self.rank, self.suit);
        }
        if self.sleeved {
            f.write_str("Sleeved ")?;
        }
        if self.is_joker() {
            return f.write_str(if self.is_red() { "Red Joker" } else { "Black Joker" });
        }

        let rank = RANK_NAMES[usize::from(self.rank - MIN_RANK)];
        let suit = Suit::ALL[usize::from(self.suit)];
        write!(f, "{rank} of {}", suit.name())
    }
}

/// Returns the canonical 54-card composition in generation order.
///
/// The two Jokers come first (Black, then Red), followed by each rank from 2
/// to Ace in all four suits.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    cards.push(Card::BLACK_JOKER);
    cards.push(Card::RED_JOKER);

    for rank in MIN_RANK..=ACE {
        for suit in Suit::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}
