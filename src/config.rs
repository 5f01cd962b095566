//! Declarative deck configuration.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::DeckBuilder;
use crate::error::DeckError;
use crate::options::{AddJokers, NoOfDecks, Shuffle, default_sort};

/// How a configured deck is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// Leave the deck in generation order.
    #[default]
    None,
    /// Shuffle with the shared process-wide source.
    Shared,
    /// Shuffle with a private generator seeded from the given value.
    Seeded(u64),
}

/// Configuration for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardeck::config::{DeckConfig, ShuffleMode};
///
/// let cards = DeckConfig::default()
///     .with_decks(6)
///     .with_jokers(2)
///     .with_shuffle(ShuffleMode::Seeded(42))
///     .build()?;
/// assert_eq!(cards.len(), 6 * 52 + 2);
/// # Ok::<(), cardeck::DeckError>(())
/// ```
///
/// Options are applied in a fixed order: decks are replicated, jokers are
/// appended, then the result is shuffled or sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckConfig {
    /// Number of standard decks.
    pub decks: usize,
    /// Number of jokers added after replication.
    pub jokers: usize,
    /// Shuffle mode.
    pub shuffle: ShuffleMode,
    /// Whether to sort the finished deck by the default ordering.
    pub sorted: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            shuffle: ShuffleMode::None,
            sorted: false,
        }
    }
}

impl DeckConfig {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::config::DeckConfig;
    ///
    /// let config = DeckConfig::default().with_decks(6);
    /// assert_eq!(config.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::config::DeckConfig;
    ///
    /// let config = DeckConfig::default().with_jokers(2);
    /// assert_eq!(config.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: usize) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the shuffle mode.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether the finished deck is sorted.
    #[must_use]
    pub const fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Checks that the configuration is consistent.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::ConflictingOrder`] if both shuffling and sorting
    /// are requested.
    pub const fn validate(&self) -> Result<(), DeckError> {
        if self.sorted && !matches!(self.shuffle, ShuffleMode::None) {
            return Err(DeckError::ConflictingOrder);
        }
        Ok(())
    }

    /// Converts the configuration into a deck builder.
    ///
    /// # Errors
    ///
    /// Returns an error if [`DeckConfig::validate`] fails.
    pub fn builder(&self) -> Result<DeckBuilder<'static>, DeckError> {
        self.validate()?;

        let mut builder = DeckBuilder::new()
            .with(NoOfDecks::new(self.decks))
            .with(AddJokers::new(self.jokers));

        builder = match self.shuffle {
            ShuffleMode::None => builder,
            ShuffleMode::Shared => builder.with(Shuffle::new()),
            ShuffleMode::Seeded(seed) => builder.with(Shuffle::seeded(seed)),
        };
        if self.sorted {
            builder = builder.with(default_sort);
        }

        Ok(builder)
    }

    /// Builds the configured deck.
    ///
    /// # Errors
    ///
    /// Returns an error if [`DeckConfig::validate`] fails.
    pub fn build(&self) -> Result<Vec<Card>, DeckError> {
        self.builder().map(DeckBuilder::build)
    }
}

