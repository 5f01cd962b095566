//! Card types and deck constants.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::order;

/// Card suit.
///
/// The declaration order is the sort order: spades first, jokers last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Sentinel suit for jokers. Never produced by standard deck generation.
    Joker,
}

impl Suit {
    /// Suits in the order a fresh deck is generated.
    ///
    /// This is not the sort order: hearts come before diamonds here.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Heart, Self::Diamond, Self::Club];

    /// Position of the suit in the sort order (spade = 0, joker = 4).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Heart => "Heart",
            Self::Club => "Club",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Rank {
    /// Ace. Also the placeholder rank carried by jokers.
    #[default]
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Lowest rank.
    pub const MIN: Self = Self::Ace;
    /// Highest rank.
    pub const MAX: Self = Self::King;

    /// All ranks from ace to king.
    pub const ALL: [Self; RANKS_PER_SUIT] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank (ace = 0, king = 12).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Equality, hashing and ordering all go through [`order::abs_value`], so a
/// joker's rank is ignored and every joker compares equal to every other.
///
/// ```
/// use cardeck::{Card, Rank, Suit};
///
/// assert_eq!(Card::new(Suit::Club, Rank::Ace).to_string(), "Ace of Clubs");
/// assert_eq!(Card::joker().to_string(), "Joker");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card. Unused for jokers.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            suit: Suit::Joker,
            rank: Rank::MIN,
        }
    }

    /// Returns `true` if this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return write!(f, "{}", self.suit);
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        order::abs_value(self) == order::abs_value(other)
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        order::abs_value(self).hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        order::compare(self, other)
    }
}

/// Number of ranks in each standard suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::STANDARD.len() * RANKS_PER_SUIT;

