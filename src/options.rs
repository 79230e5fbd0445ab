//! Game configuration options.

use alloc::vec::Vec;

use crate::error::ConfigError;

/// Fewest players a game supports.
pub const MIN_PLAYERS: u8 = 2;
/// Most players a game supports.
pub const MAX_PLAYERS: u8 = 4;
/// Player count used when the requested one is out of range.
pub const DEFAULT_PLAYERS: u8 = 2;

/// Smallest starting hand.
pub const MIN_HAND_SIZE: u8 = 2;
/// Largest starting hand.
pub const MAX_HAND_SIZE: u8 = 7;
/// Hand size used when the requested one is out of range.
pub const DEFAULT_HAND_SIZE: u8 = 5;

/// Configuration options for an Elevator game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use elevator::GameOptions;
///
/// let options = GameOptions::default().with_players(3).with_hand_size(7);
/// assert_eq!(options.players, 3);
/// assert_eq!(options.hand_size, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players, seat 0 first.
    pub players: u8,
    /// Number of cards dealt to each player.
    pub hand_size: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// Out-of-range values are accepted here and corrected by
    /// [`GameOptions::validate`].
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the starting hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use elevator::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Replaces out-of-range values with their defaults.
    ///
    /// Returns the corrected options along with one [`ConfigError`] per value
    /// that was replaced. Valid options come back unchanged with no errors.
    ///
    /// ```
    /// use elevator::{ConfigError, GameOptions};
    ///
    /// let (options, notices) = GameOptions::default().with_players(9).validate();
    /// assert_eq!(options.players, 2);
    /// assert_eq!(
    ///     notices,
    ///     vec![ConfigError::InvalidPlayerCount { requested: 9, applied: 2 }]
    /// );
    /// ```
    #[must_use]
    pub fn validate(mut self) -> (Self, Vec<ConfigError>) {
        let mut notices = Vec::new();

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            notices.push(ConfigError::InvalidPlayerCount {
                requested: self.players,
                applied: DEFAULT_PLAYERS,
            });
            self.players = DEFAULT_PLAYERS;
        }

        if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&self.hand_size) {
            notices.push(ConfigError::InvalidHandSize {
                requested: self.hand_size,
                applied: DEFAULT_HAND_SIZE,
            });
            self.hand_size = DEFAULT_HAND_SIZE;
        }

        (self, notices)
    }
}
