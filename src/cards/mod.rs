//! Card primitives.
//!
//! Every set of cards is a 52-bit mask, so dealing, board-conflict removal and
//! combo overlap tests are single bitwise operations.
//!
//! - [`Card`] one card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Hand`] an unordered set of cards as a 64-bit bitmask
//! - [`Hole`] a two-card combo, the unit a range is made of
//! - [`Board`] the community cards
//! - [`Deck`] the cards still available to deal
//! - [`Street`] the betting rounds, preflop to river
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;
