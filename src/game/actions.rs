use core::mem;

use tracing::{debug, error, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError};

use super::Game;

impl Game {
    pub(super) fn ensure_player_turn(&self, player: u8) -> Result<(), ActionError> {
        if self.winner.is_some() {
            return Err(ActionError::GameOver);
        }

        if player >= self.options.players {
            return Err(ActionError::PlayerNotFound);
        }

        if player != self.current_player() {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Moves the card at `position` to the face-up pile and ends the turn.
    ///
    /// Callers must have checked the turn, the position, and adjacency.
    pub(super) fn commit_play(&mut self, player: u8, position: usize) -> Card {
        let hand = &mut self.hands[usize::from(player)];
        let card = hand.remove(position);
        let cards_left = hand.len();

        self.face_up.insert(0, card);
        self.turn += 1;
        self.consecutive_draws = 0;
        debug!(player, %card, cards_left, "card played");

        if cards_left == 0 {
            self.winner = Some(player);
            info!(player, turn = self.turn, "player emptied their hand");
        }

        card
    }

    /// Plays `card` from the player's hand onto the face-up pile.
    ///
    /// The card must be one step away from the face-up card on the rank cycle.
    /// Emptying the hand records the player as the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player does not exist, it is
    /// not the player's turn, the card is not in the player's hand, or the
    /// card is not adjacent to the face-up card. The game is unchanged on
    /// error.
    pub fn play_card(&mut self, player: u8, card: Card) -> Result<(), ActionError> {
        self.ensure_player_turn(player)?;

        let position = self.hands[usize::from(player)]
            .iter()
            .position(|held| *held == card)
            .ok_or(ActionError::CardNotInHand)?;

        self.play_checked(player, position).map(|_| ())
    }

    /// Plays the card at `index` (zero-based) in the player's hand.
    ///
    /// Returns the card that was played.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_card`]; an index past the end of the hand is
    /// reported as [`ActionError::CardNotInHand`].
    pub fn play_card_at(&mut self, player: u8, index: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(player)?;

        if index >= self.hands[usize::from(player)].len() {
            return Err(ActionError::CardNotInHand);
        }

        self.play_checked(player, index)
    }

    fn play_checked(&mut self, player: u8, position: usize) -> Result<Card, ActionError> {
        let card = self.hands[usize::from(player)][position];
        if !self.face_up_top().is_adjacent(&card) {
            return Err(ActionError::NotAdjacent);
        }

        Ok(self.commit_play(player, position))
    }

    /// Draws the top card of the draw pile into the player's hand.
    ///
    /// If that empties the draw pile, the face-up pile is shuffled into a new
    /// draw pile and one card is turned face up from it. When every player has
    /// drawn in a row, a card is flipped onto the face-up pile.
    ///
    /// Returns the card drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player does not exist, or it
    /// is not the player's turn. Returns [`ActionError::Deal`] if there are not
    /// enough cards outside the players' hands to complete the draw; the game
    /// cannot continue after that.
    pub fn draw_card(&mut self, player: u8) -> Result<Card, ActionError> {
        self.ensure_player_turn(player)?;
        self.ensure_draw_possible()?;

        let card = self.draw_pile.deal_one()?;
        self.hands[usize::from(player)].push(card);
        debug!(player, draw_pile = self.draw_pile.len(), "card drawn");
        self.refill_if_exhausted()?;

        self.consecutive_draws += 1;
        if self.consecutive_draws >= self.options.players {
            self.flip_card()?;
        }

        self.turn += 1;
        Ok(card)
    }

    /// Checks that a draw, including any forced flip, has cards to work with.
    fn ensure_draw_possible(&self) -> Result<(), DealError> {
        if self.draw_pile.is_empty() {
            error!("draw requested from an empty draw pile");
            return Err(DealError::Underflow {
                requested: 1,
                available: 0,
            });
        }

        if self.consecutive_draws + 1 >= self.options.players {
            // A draw that empties the pile recycles all but one face-up card.
            let left_after_draw = if self.draw_pile.len() > 1 {
                self.draw_pile.len() - 1
            } else {
                self.face_up.len() - 1
            };

            if left_after_draw == 0 {
                error!("no card left to flip after drawing");
                return Err(DealError::Underflow {
                    requested: 1,
                    available: 0,
                });
            }
        }

        Ok(())
    }

    /// Turns the top card of the draw pile onto the face-up pile.
    ///
    /// Resets the consecutive draw count and does not advance the turn.
    /// [`Game::draw_card`] calls this once every player has drawn in a row.
    ///
    /// Calling it directly reveals a card out of turn: no seat owns the flip,
    /// so there is no turn check. If the flip empties the draw pile, the
    /// face-up pile is recycled as after a draw.
    ///
    /// Returns the card flipped.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::GameOver`] once a winner is recorded, or
    /// [`ActionError::Deal`] if the draw pile is empty.
    pub fn flip_card(&mut self) -> Result<Card, ActionError> {
        if self.winner.is_some() {
            return Err(ActionError::GameOver);
        }

        let card = self.draw_pile.deal_one()?;
        self.face_up.insert(0, card);
        self.consecutive_draws = 0;
        debug!(%card, "card flipped");

        self.refill_if_exhausted()?;
        Ok(card)
    }

    /// Recycles the face-up pile into the draw pile once the latter is empty.
    fn refill_if_exhausted(&mut self) -> Result<(), DealError> {
        if !self.draw_pile.is_empty() {
            return Ok(());
        }

        if self.face_up.is_empty() {
            return Err(DealError::Underflow {
                requested: 1,
                available: 0,
            });
        }

        let mut pile = Deck::from_cards(mem::take(&mut self.face_up));
        pile.shuffle(&mut self.rng);
        self.face_up = pile.deal(1)?;
        self.draw_pile = pile;

        info!(
            draw_pile = self.draw_pile.len(),
            "face-up pile recycled into the draw pile"
        );
        Ok(())
    }
}
