//! Default card ordering.
//!
//! Cards are ranked by a single integer key: spades first, then diamonds,
//! hearts and clubs, ace low within each suit, with jokers after everything.

use core::cmp::Ordering;

use crate::card::{Card, RANKS_PER_SUIT, Suit};

/// Sort key of a card: `suit_ordinal * 13 + rank_ordinal`.
///
/// Jokers all share [`JOKER_VALUE`] regardless of the rank they carry.
#[must_use]
pub const fn abs_value(card: &Card) -> u8 {
    if card.is_joker() {
        return JOKER_VALUE;
    }
    card.suit.ordinal() * RANKS_PER_SUIT as u8 + card.rank.ordinal()
}

/// Returns `true` if `a` sorts before `b`.
#[must_use]
pub const fn less(a: &Card, b: &Card) -> bool {
    abs_value(a) < abs_value(b)
}

/// Comparator form of [`less`], suitable for [`crate::options::Sort`].
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    abs_value(a).cmp(&abs_value(b))
}

/// Key of the first joker, one past the last standard card.
pub const JOKER_VALUE: u8 = Suit::Joker.ordinal() * RANKS_PER_SUIT as u8;

