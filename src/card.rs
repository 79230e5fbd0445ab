//! Card types and the cyclic rank order.

use core::cmp::Ordering;
use core::fmt;

/// Number of ranks in the cyclic order.
pub const RANK_COUNT: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card rank.
///
/// Ranks form a cycle: Ace follows King, so the two are adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in cyclic order, starting at Ace.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank in the cyclic order (Ace = 0, King = 12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the rank at `index`, or `None` if it is not below [`RANK_COUNT`].
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < RANK_COUNT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Shortest distance between two ranks going either way round the cycle.
    ///
    /// ```
    /// use elevator::Rank;
    ///
    /// assert_eq!(Rank::King.cyclic_distance(Rank::Ace), 1);
    /// assert_eq!(Rank::Two.cyclic_distance(Rank::King), 2);
    /// ```
    #[must_use]
    pub const fn cyclic_distance(self, other: Self) -> u8 {
        let diff = self.index().abs_diff(other.index());
        if diff <= RANK_COUNT - diff {
            diff
        } else {
            RANK_COUNT - diff
        }
    }

    /// Display symbol. Ten uses the single-character `⒑`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => '\u{2491}',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{2666}',
            Self::Clubs => '\u{2663}',
        }
    }
}

/// A playing card.
///
/// Equality covers both rank and suit so that a specific card can be found in
/// a hand. Game rules only ever look at the rank; see [`Card::cmp_rank`] and
/// [`Card::is_adjacent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Position of the card's rank in the cyclic order.
    #[must_use]
    pub const fn rank_index(&self) -> u8 {
        self.rank.index()
    }

    /// Orders two cards by rank alone.
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Returns `true` if the two ranks are one step apart on the cycle.
    ///
    /// This is the only legality rule of the game.
    ///
    /// ```
    /// use elevator::{Card, Rank, Suit};
    ///
    /// let king = Card::new(Rank::King, Suit::Clubs);
    /// assert!(king.is_adjacent(&Card::new(Rank::Ace, Suit::Hearts)));
    /// assert!(!king.is_adjacent(&Card::new(Rank::King, Suit::Spades)));
    /// ```
    #[must_use]
    pub const fn is_adjacent(&self, other: &Self) -> bool {
        self.rank.cyclic_distance(other.rank) == 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}
