//! The 52-card French deck and position lookups.

extern crate alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::{Index, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use core::slice;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::IndexError;

/// An ordered, immutable deck holding one card for every rank and suit.
///
/// Cards are stored suit by suit in [`SUITS`] order, each suit running
/// through [`RANKS`] from 2 up to the ace.
///
/// ```
/// use datamodel::{Card, FrenchDeck, Rank, Suit};
///
/// let deck = FrenchDeck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.at(-1), Ok(&Card::new(Rank::Ace, Suit::Hearts)));
/// assert!(deck.contains(&Card::new(Rank::Queen, Suit::Hearts)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrenchDeck {
    cards: Vec<Card>,
}

impl FrenchDeck {
    /// Builds a full deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Looks up a single card or a contiguous run of cards.
    ///
    /// Positions are zero-based; negative positions count back from the end,
    /// so `-1` is the last card. Ranges return a slice in deck order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if a position or range endpoint
    /// falls outside the deck. A range that starts after it ends is empty.
    ///
    /// ```
    /// use datamodel::{FrenchDeck, IndexError};
    ///
    /// let deck = FrenchDeck::new();
    /// assert_eq!(deck.at(0..3).map(<[_]>::len), Ok(3));
    /// assert_eq!(deck.at(5..2).map(<[_]>::len), Ok(0));
    /// assert_eq!(deck.at(52), Err(IndexError::OutOfRange { index: 52, len: 52 }));
    /// ```
    pub fn at<P: Position>(&self, position: P) -> Result<&P::Output, IndexError> {
        position.lookup(&self.cards)
    }

    /// Returns an iterator over the cards in deck order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.cards.iter(),
        }
    }

    /// Returns whether the deck holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the zero-based position of `card`, if the deck holds it.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for FrenchDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[Card]> for FrenchDeck {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<usize> for FrenchDeck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a FrenchDeck {
    type Item = &'a Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the cards of a [`FrenchDeck`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Card>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<&'a Card> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// A position or range of positions accepted by [`FrenchDeck::at`].
///
/// Implemented for `isize` (yielding a [`Card`]) and for `isize` ranges
/// (yielding a slice of cards). Unsigned positions go through
/// `Index<usize>` instead, so plain integer literals stay unambiguous.
pub trait Position {
    /// What the lookup yields.
    type Output: ?Sized;

    /// Resolves this position against `cards`.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] if the position does not fit `cards`.
    fn lookup(self, cards: &[Card]) -> Result<&Self::Output, IndexError>;
}

/// Maps a possibly negative position onto `0..=len`.
fn normalize(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    }
}

/// Resolves a range endpoint, which may sit one past the last card.
fn endpoint(index: isize, len: usize) -> Result<usize, IndexError> {
    normalize(index, len)
        .filter(|&i| i <= len)
        .ok_or(IndexError::OutOfRange { index, len })
}

/// Resolves a position that must name an existing card.
fn element(index: isize, len: usize) -> Result<usize, IndexError> {
    normalize(index, len)
        .filter(|&i| i < len)
        .ok_or(IndexError::OutOfRange { index, len })
}

/// Slices already validated bounds; an inverted range is empty.
fn run(cards: &[Card], start: usize, end: usize) -> &[Card] {
    &cards[start..end.max(start)]
}

impl Position for isize {
    type Output = Card;

    fn lookup(self, cards: &[Card]) -> Result<&Card, IndexError> {
        let index = element(self, cards.len())?;
        Ok(&cards[index])
    }
}

impl Position for Range<isize> {
    type Output = [Card];

    fn lookup(self, cards: &[Card]) -> Result<&[Card], IndexError> {
        let start = endpoint(self.start, cards.len())?;
        let end = endpoint(self.end, cards.len())?;
        Ok(run(cards, start, end))
    }
}

impl Position for RangeInclusive<isize> {
    type Output = [Card];

    fn lookup(self, cards: &[Card]) -> Result<&[Card], IndexError> {
        // An iterated-out range still reports its original bounds.
        let exhausted = self.is_empty() && self.start() <= self.end();
        let (start, last) = self.into_inner();
        let start = endpoint(start, cards.len())?;
        let end = element(last, cards.len())? + 1;
        if exhausted {
            return Ok(run(cards, start, start));
        }
        Ok(run(cards, start, end))
    }
}

impl Position for RangeFrom<isize> {
    type Output = [Card];

    fn lookup(self, cards: &[Card]) -> Result<&[Card], IndexError> {
        let start = endpoint(self.start, cards.len())?;
        Ok(run(cards, start, cards.len()))
    }
}

impl Position for RangeTo<isize> {
    type Output = [Card];

    fn lookup(self, cards: &[Card]) -> Result<&[Card], IndexError> {
        let end = endpoint(self.end, cards.len())?;
        Ok(run(cards, 0, end))
    }
}

impl Position for RangeToInclusive<isize> {
    type Output = [Card];

    fn lookup(self, cards: &[Card]) -> Result<&[Card], IndexError> {
        let end = element(self.end, cards.len())? + 1;
        Ok(run(cards, 0, end))
    }
}

impl Position for RangeFull {
    type Output = [Card];

    fn lookup(self, cards: &[Card]) -> Result<&[Card], IndexError> {
        Ok(cards)
    }
}
