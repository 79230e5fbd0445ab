//! Automated play for computer-controlled seats.

use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::Game;

/// The move a bot made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotMove {
    /// The bot played this card onto the face-up pile.
    Played(Card),
    /// The bot had no legal play and drew this card.
    Drew(Card),
}

impl BotMove {
    /// Returns the card that was played or drawn.
    #[must_use]
    pub const fn card(&self) -> Card {
        match self {
            Self::Played(card) | Self::Drew(card) => *card,
        }
    }
}

impl Game {
    /// Makes a move for the player using a greedy policy.
    ///
    /// The hand is scanned in its current order and the first card adjacent
    /// to the face-up card is played. With no such card the bot draws.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_card`] and [`Game::draw_card`].
    pub fn bot_move(&mut self, player: u8) -> Result<BotMove, ActionError> {
        self.ensure_player_turn(player)?;

        let top = self.face_up_top();
        let choice = self.hands[usize::from(player)]
            .iter()
            .position(|card| card.is_adjacent(&top));

        let outcome = match choice {
            Some(position) => BotMove::Played(self.commit_play(player, position)),
            None => BotMove::Drew(self.draw_card(player)?),
        };

        debug!(player, ?outcome, "bot moved");
        Ok(outcome)
    }
}
