//! Error types for game operations.

use thiserror::Error;

/// A configuration value that was out of range and has been replaced.
///
/// These are notices rather than failures: the game is still created using
/// the default in place of the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside the supported range.
    #[error("illegal number of players ({requested}), players set to {applied}")]
    InvalidPlayerCount {
        /// The value that was asked for.
        requested: u8,
        /// The value that was used instead.
        applied: u8,
    },
    /// Hand size outside the supported range.
    #[error("illegal hand size ({requested}), hand size set to {applied}")]
    InvalidHandSize {
        /// The value that was asked for.
        requested: u8,
        /// The value that was used instead.
        applied: u8,
    },
}

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// More cards were requested than the deck holds.
    ///
    /// With recycling in place this only happens when nearly every card is
    /// held in hands, and it means the game can no longer proceed.
    #[error("cannot deal {requested} card(s) from a deck of {available}")]
    Underflow {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },
}

/// Errors that can occur during player moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A winner has already been recorded.
    #[error("the game is already over")]
    GameOver,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not adjacent to the face-up card.
    #[error("card is not adjacent to the face-up card")]
    NotAdjacent,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// The draw pile could not supply the cards the move needs.
    #[error(transparent)]
    Deal(#[from] DealError),
}

impl ActionError {
    /// Returns `true` if the caller can simply ask for another move.
    ///
    /// A [`ActionError::Deal`] error is not recoverable: the cards needed to
    /// keep playing are all in players' hands.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Deal(_))
    }
}
