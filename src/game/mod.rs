//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, ConfigError, DealError};
use crate::options::GameOptions;

mod actions;
mod bot;
pub mod state;

pub use bot::BotMove;
pub use state::GameState;

/// An Elevator game: hands, a draw pile, a face-up pile, and whose turn it is.
///
/// All moves go through [`Game::play_card`], [`Game::draw_card`], and
/// [`Game::bot_move`]. A move either applies completely or returns an
/// [`ActionError`] and leaves the game exactly as it was.
#[derive(Debug, Clone)]
pub struct Game {
    /// Options after validation.
    options: GameOptions,
    /// Corrections made to the requested options.
    config_warnings: Vec<ConfigError>,
    /// One hand per seat.
    hands: Vec<Vec<Card>>,
    /// Cards still to be drawn.
    draw_pile: Deck,
    /// Discarded cards, most recent first. Never empty.
    face_up: Vec<Card>,
    /// Number of moves taken so far.
    turn: usize,
    /// Draws since the last card was played or flipped.
    consecutive_draws: u8,
    /// Seat of the player who emptied their hand.
    winner: Option<u8>,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game from a freshly shuffled full deck.
    ///
    /// Out-of-range options are replaced by their defaults; the replacements
    /// are logged and available from [`Game::config_warnings`].
    ///
    /// # Example
    ///
    /// ```
    /// use elevator::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_players(3), 42);
    /// assert_eq!(game.player_count(), 3);
    /// assert_eq!(game.hand(0).map(<[_]>::len), Some(5));
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck covers the largest validated configuration"
    )]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new_full();
        deck.shuffle(&mut rng);

        Self::deal_from(options, deck, rng)
            .expect("a full deck covers the largest validated configuration")
    }

    /// Creates a game that deals from `deck` as given, without shuffling it.
    ///
    /// Hands are dealt seat by seat from the top of the deck, then one card is
    /// turned face up. `seed` drives later reshuffles when the draw pile is
    /// recycled.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Underflow`] if `deck` is too small for the
    /// (validated) options.
    pub fn with_deck(options: GameOptions, deck: Deck, seed: u64) -> Result<Self, DealError> {
        Self::deal_from(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn deal_from(options: GameOptions, mut deck: Deck, rng: ChaCha8Rng) -> Result<Self, DealError> {
        let (options, config_warnings) = options.validate();
        for notice in &config_warnings {
            warn!(%notice, "game options corrected");
        }

        let needed = usize::from(options.players) * usize::from(options.hand_size) + 1;
        if deck.len() < needed {
            return Err(DealError::Underflow {
                requested: needed,
                available: deck.len(),
            });
        }

        let hands = (0..options.players)
            .map(|_| deck.deal(usize::from(options.hand_size)))
            .collect::<Result<Vec<_>, _>>()?;
        let face_up = deck.deal(1)?;

        debug!(
            players = options.players,
            hand_size = options.hand_size,
            draw_pile = deck.len(),
            "game dealt"
        );

        Ok(Self {
            options,
            config_warnings,
            hands,
            draw_pile: deck,
            face_up,
            turn: 0,
            consecutive_draws: 0,
            winner: None,
            rng,
        })
    }

    /// Returns the options in effect after validation.
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the corrections applied to the requested options.
    pub fn config_warnings(&self) -> &[ConfigError] {
        &self.config_warnings
    }

    /// Returns the number of players.
    pub const fn player_count(&self) -> u8 {
        self.options.players
    }

    /// Returns the starting hand size.
    pub const fn hand_size(&self) -> u8 {
        self.options.hand_size
    }

    /// Returns the player's hand in its current order.
    ///
    /// Returns `None` if the player does not exist.
    pub fn hand(&self, player: u8) -> Option<&[Card]> {
        self.hands.get(usize::from(player)).map(Vec::as_slice)
    }

    /// Returns a copy of the player's hand sorted by rank.
    pub fn sorted_hand(&self, player: u8) -> Option<Vec<Card>> {
        let mut hand = self.hand(player)?.to_vec();
        hand.sort_by(Card::cmp_rank);
        Some(hand)
    }

    /// Sorts the player's hand by rank, keeping suits in their current order.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::PlayerNotFound`] if the player does not exist.
    pub fn sort_hand(&mut self, player: u8) -> Result<(), ActionError> {
        let hand = self
            .hands
            .get_mut(usize::from(player))
            .ok_or(ActionError::PlayerNotFound)?;
        hand.sort_by(Card::cmp_rank);
        Ok(())
    }

    /// Returns the card on top of the face-up pile.
    pub fn face_up_top(&self) -> Card {
        // The pile is dealt one card at creation and recycling always
        // leaves one card behind.
        self.face_up[0]
    }

    /// Returns the face-up pile, most recent card first.
    pub fn face_up_pile(&self) -> &[Card] {
        &self.face_up
    }

    /// Returns the draw pile; its top card is the next one drawn.
    pub const fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    /// Returns the number of moves taken so far.
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the seat whose turn it is.
    pub fn current_player(&self) -> u8 {
        (self.turn % usize::from(self.options.players)) as u8
    }

    /// Returns the number of draws since a card was last played or flipped.
    pub const fn consecutive_draws(&self) -> u8 {
        self.consecutive_draws
    }

    /// Returns the winning seat, if any.
    pub const fn winner(&self) -> Option<u8> {
        self.winner
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        match self.winner {
            Some(winner) => GameState::Finished { winner },
            None => GameState::InProgress,
        }
    }

    /// Returns the number of cards in play across hands and both piles.
    pub fn total_cards(&self) -> usize {
        self.hands.iter().map(Vec::len).sum::<usize>() + self.draw_pile.len() + self.face_up.len()
    }
}
