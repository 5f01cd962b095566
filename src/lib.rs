//! A standard playing-card deck with optional `no_std` support.
//!
//! The crate builds decks by starting from one 52-card deck and folding a
//! chain of [`options::DeckOption`]s over it: replicate, filter, add jokers,
//! shuffle and sort, in whatever order the caller lists them.
//!
//! # Example
//!
//! ```
//! use cardeck::{Card, Rank, deck::DeckBuilder};
//! use cardeck::options::{AddJokers, FilterOut, NoOfDecks, Shuffle};
//!
//! let cards = DeckBuilder::new()
//!     .with(FilterOut::new(|c: &Card| c.rank == Rank::Two))
//!     .with(NoOfDecks::new(3))
//!     .with(AddJokers::new(5))
//!     .with(Shuffle::seeded(42))
//!     .build();
//! assert_eq!(cards.len(), (52 - 4) * 3 + 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod options;
pub mod order;
pub mod rng;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use config::{DeckConfig, ShuffleMode};
pub use deck::DeckBuilder;
pub use error::DeckError;
pub use options::{
    AddJokers, DeckOption, FilterOut, NoOfDecks, Shuffle, Sort, default_sort, shuffle,
};
