//! Deck construction.

use core::fmt;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::DeckOption;

/// Creates one standard 52-card deck, unshuffled.
///
/// Cards are suit-major in [`Suit::STANDARD`] order (spades, hearts, diamonds,
/// clubs), ace to king within each suit.
///
/// ```
/// use cardeck::{Card, Rank, Suit, deck};
///
/// let cards = deck::new();
/// assert_eq!(cards.len(), 52);
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
/// assert_eq!(cards[13], Card::new(Suit::Heart, Rank::Ace));
/// ```
#[must_use]
pub fn new() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Creates a standard deck and applies `options` to it in order.
///
/// ```
/// use cardeck::deck;
/// use cardeck::options::{AddJokers, DeckOption, NoOfDecks};
///
/// let options: Vec<Box<dyn DeckOption>> =
///     vec![Box::new(NoOfDecks::new(2)), Box::new(AddJokers::new(1))];
/// assert_eq!(deck::build(options).len(), 105);
/// ```
pub fn build<'a, I>(options: I) -> Vec<Card>
where
    I: IntoIterator<Item = Box<dyn DeckOption + 'a>>,
{
    let cards = options
        .into_iter()
        .fold(new(), |cards, mut option| option.apply(cards));
    tracing::debug!(cards = cards.len(), "built deck");
    cards
}

/// Collects deck options and applies them to a fresh standard deck.
///
/// Options run in the order they were added; none are skipped or reordered.
///
/// ```
/// use cardeck::{Card, Rank, Suit};
/// use cardeck::deck::DeckBuilder;
/// use cardeck::options::{AddJokers, FilterOut, NoOfDecks};
///
/// let cards = DeckBuilder::new()
///     .with(FilterOut::new(|c: &Card| c.rank == Rank::Two))
///     .with(NoOfDecks::new(3))
///     .with(AddJokers::new(5))
///     .build();
/// assert_eq!(cards.len(), (52 - 4) * 3 + 5);
/// ```
#[derive(Default)]
pub struct DeckBuilder<'a> {
    options: Vec<Box<dyn DeckOption + 'a>>,
}

impl<'a> DeckBuilder<'a> {
    /// Creates a builder with no options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends an option to the chain.
    #[must_use]
    pub fn with(mut self, option: impl DeckOption + 'a) -> Self {
        self.options.push(Box::new(option));
        self
    }

    /// Builds the deck.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        build(self.options)
    }
}

impl fmt::Debug for DeckBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("options", &self.options.len())
            .finish()
    }
}

