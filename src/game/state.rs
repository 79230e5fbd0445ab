//! Game state types.

/// Game state, derived from whether a winner has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Moves are being accepted.
    InProgress,
    /// A player emptied their hand; no further moves are accepted.
    Finished {
        /// Seat of the winning player.
        winner: u8,
    },
}

impl GameState {
    /// Returns `true` once a winner has been recorded.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}
