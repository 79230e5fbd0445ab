//! A rules engine for Elevator, a card game played around the rank cycle,
//! with optional `no_std` support.
//!
//! Players take turns discarding a card one rank above or below the face-up
//! card (King and Ace are neighbours), or drawing when they cannot. The first
//! player to empty their hand wins. The crate provides a [`Game`] type that
//! owns the hands and piles, validates every move, recycles the face-up pile
//! when the draw pile runs out, and can play seats on its own.
//!
//! # Example
//!
//! ```
//! use elevator::{BotMove, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let player = game.current_player();
//! match game.bot_move(player).unwrap() {
//!     BotMove::Played(card) => assert_eq!(game.face_up_top(), card),
//!     BotMove::Drew(_) => assert_eq!(game.hand(player).map(<[_]>::len), Some(6)),
//! }
//! assert_eq!(game.turn(), 1);
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
pub mod game;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_COUNT, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, ConfigError, DealError};
pub use game::{BotMove, Game, GameState};
pub use options::{
    DEFAULT_HAND_SIZE, DEFAULT_PLAYERS, GameOptions, MAX_HAND_SIZE, MAX_PLAYERS, MIN_HAND_SIZE,
    MIN_PLAYERS,
};
