//! A French card deck and a planar vector, built on Rust's collection and
//! operator traits, with optional `no_std` support.
//!
//! [`FrenchDeck`] behaves like a read-only sequence: it has a length,
//! positional lookup with negative positions and ranges, iteration and
//! membership. [`Vector`] is a small value type supporting `+`, scalar `*`,
//! magnitude and a truthiness derived from it.
//!
//! # Example
//!
//! ```
//! use datamodel::{Card, FrenchDeck, Rank, Suit, Vector};
//!
//! let deck = FrenchDeck::new();
//! assert_eq!(deck[0], Card::new(Rank::Number(2), Suit::Spades));
//!
//! let v = Vector::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod vector;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::{FrenchDeck, Iter, Position};
pub use error::{IndexError, ParseCardError, VectorError};
pub use vector::{Operand, Vector};
