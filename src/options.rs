//! Deck transformations.
//!
//! A [`DeckOption`] consumes a sequence of cards and returns a new one. The
//! deck builder applies options one after another, in the order supplied.
//!
//! Any `FnMut(Vec<Card>) -> Vec<Card>` is an option, so [`shuffle`],
//! [`default_sort`] and ad-hoc closures compose with the built-in variants:
//!
//! ```
//! use cardeck::deck::DeckBuilder;
//! use cardeck::options::{AddJokers, NoOfDecks, default_sort};
//!
//! let cards = DeckBuilder::new()
//!     .with(NoOfDecks::new(2))
//!     .with(AddJokers::new(2))
//!     .with(default_sort)
//!     .build();
//! assert_eq!(cards.len(), 106);
//! assert!(cards[104].is_joker());
//! ```

use core::cmp::Ordering;

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DeckError;
use crate::order;
use crate::rng;

/// A single step in deck construction.
pub trait DeckOption {
    /// Transforms `cards` into the next sequence.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> DeckOption for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

fn count_from_signed(n: i64) -> Result<usize, DeckError> {
    if n < 0 {
        return Err(DeckError::NegativeCount(n));
    }
    usize::try_from(n).map_err(|_| DeckError::CountTooLarge(n))
}

/// Repeats the sequence `n` times in total.
///
/// `n = 0` empties the deck; `n = 1` leaves it unchanged.
///
/// # Panics
///
/// Applying the option panics if the repeated length overflows `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoOfDecks(usize);

impl NoOfDecks {
    /// Creates an option that yields `n` copies of the input.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self(n)
    }

    /// Number of copies produced.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for NoOfDecks {
    type Error = DeckError;

    /// Rejects negative counts instead of clamping them.
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        count_from_signed(n).map(Self)
    }
}

impl DeckOption for NoOfDecks {
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        cards.repeat(self.0)
    }
}

/// Removes every card matching a predicate, keeping the rest in order.
#[derive(Debug, Clone, Copy)]
pub struct FilterOut<P>(P);

impl<P> FilterOut<P>
where
    P: FnMut(&Card) -> bool,
{
    /// Creates an option dropping cards for which `predicate` returns `true`.
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self(predicate)
    }
}

impl<P> DeckOption for FilterOut<P>
where
    P: FnMut(&Card) -> bool,
{
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.retain(|card| !(self.0)(card));
        cards
    }
}

/// Appends jokers to the end of the sequence.
///
/// # Panics
///
/// Applying the option panics if the new length overflows `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddJokers(usize);

impl AddJokers {
    /// Creates an option appending `n` jokers.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self(n)
    }

    /// Number of jokers appended.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for AddJokers {
    type Error = DeckError;

    /// Rejects negative counts instead of clamping them.
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        count_from_signed(n).map(Self)
    }
}

impl DeckOption for AddJokers {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.extend(core::iter::repeat_n(Card::joker(), self.0));
        cards
    }
}

/// Where a [`Shuffle`] draws its randomness from.
#[derive(Debug, Clone)]
enum Source<R> {
    Shared,
    Owned(R),
}

/// Replaces the sequence with a uniformly random permutation of itself.
///
/// [`Shuffle::new`] draws from the process-wide source in [`crate::rng`].
/// [`Shuffle::with_rng`] and [`Shuffle::seeded`] own their generator, so they
/// never touch shared state and are reproducible on their own.
#[derive(Debug, Clone)]
pub struct Shuffle<R = ChaCha8Rng> {
    source: Source<R>,
}

impl Shuffle {
    /// Shuffles with the shared process-wide source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: Source::Shared,
        }
    }

    /// Shuffles with a private ChaCha8 generator seeded from `seed`.
    ///
    /// ```
    /// use cardeck::deck;
    /// use cardeck::options::{DeckOption, Shuffle};
    ///
    /// let a = Shuffle::seeded(0).apply(deck::new());
    /// let b = Shuffle::seeded(0).apply(deck::new());
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for Shuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Shuffle<R> {
    /// Shuffles with a caller-supplied generator.
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Self {
            source: Source::Owned(rng),
        }
    }
}

impl<R: RngCore> DeckOption for Shuffle<R> {
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        match &mut self.source {
            Source::Shared => rng::with_shared(|shared| cards.shuffle(shared)),
            Source::Owned(rng) => cards.shuffle(rng),
        }
        tracing::trace!(
            cards = cards.len(),
            shared = matches!(self.source, Source::Shared),
            "shuffled"
        );
        cards
    }
}

/// Shuffles `cards` with the shared process-wide source.
///
/// Usable directly as a [`DeckOption`].
#[must_use]
pub fn shuffle(cards: Vec<Card>) -> Vec<Card> {
    Shuffle::new().apply(cards)
}

/// Sorts the sequence with a pairwise comparator.
///
/// The sort is unstable: cards the comparator considers equal may come out in
/// any relative order.
///
/// ```
/// use cardeck::{Card, Rank, Suit, deck};
/// use cardeck::options::Sort;
///
/// // Kings first, then by suit.
/// let cards = deck::DeckBuilder::new()
///     .with(Sort::new(|a: &Card, b: &Card| b.rank.cmp(&a.rank).then(a.suit.cmp(&b.suit))))
///     .build();
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::King));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sort<C>(C);

impl<C> Sort<C>
where
    C: FnMut(&Card, &Card) -> Ordering,
{
    /// Creates an option sorting by `compare`.
    #[must_use]
    pub const fn new(compare: C) -> Self {
        Self(compare)
    }
}

impl<C> DeckOption for Sort<C>
where
    C: FnMut(&Card, &Card) -> Ordering,
{
    fn apply(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_unstable_by(&mut self.0);
        cards
    }
}

/// Sorts `cards` by the default ordering in [`crate::order`].
///
/// Usable directly as a [`DeckOption`].
#[must_use]
pub fn default_sort(cards: Vec<Card>) -> Vec<Card> {
    Sort::new(order::compare).apply(cards)
}

