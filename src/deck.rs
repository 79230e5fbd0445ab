//! An ordered pile of cards that is dealt from its tail.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered, mutable sequence of cards.
///
/// The last card in [`Deck::cards`] is the top of the deck: dealing removes
/// cards from the tail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 52 standard cards, rank-major and suit-minor, unshuffled.
    ///
    /// ```
    /// use elevator::{DECK_SIZE, Deck};
    ///
    /// assert_eq!(Deck::new_full().len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new_full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Wraps existing cards without reordering them.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes the top `n` cards and returns them in deck order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Underflow`] without touching the deck if `n`
    /// exceeds the number of cards left.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        let available = self.cards.len();
        if n > available {
            return Err(DealError::Underflow {
                requested: n,
                available,
            });
        }

        Ok(self.cards.split_off(available - n))
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Underflow`] if the deck is empty.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::Underflow {
            requested: 1,
            available: 0,
        })
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck and returns its cards, bottom first.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
