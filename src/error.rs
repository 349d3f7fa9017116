//! Error types for deck lookups, vector arithmetic and card parsing.

use thiserror::Error;

/// Errors that can occur when looking up cards by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Position (or range endpoint) outside the deck.
    #[error("position {index} out of range for deck of {len} cards")]
    OutOfRange {
        /// The position as given by the caller.
        index: isize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur during vector arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Vectors can only be multiplied by a scalar.
    #[error("unsupported operation: a vector can only be multiplied by a scalar")]
    UnsupportedOperation,
}

/// Errors that can occur when parsing ranks and suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Not one of 2-10, J, Q, K, A.
    #[error("invalid rank")]
    InvalidRank,
    /// Not one of spades, diamonds, clubs, hearts.
    #[error("invalid suit")]
    InvalidSuit,
}
