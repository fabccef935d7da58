//! Card types and their canonical textual form.
//!
//! A card renders as `"<value> of <suit>"`, for example `"10 of Hearts"` or
//! `"Ace of Spades"`. [`Card`]'s [`FromStr`] implementation accepts exactly
//! that form, so every card round-trips through its string.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card rank, ordered from Two (lowest) to Ace (highest).
///
/// The discriminant is the rank index used by the evaluator (0 for Two,
/// 12 for Ace). Aces are always high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 2.
    Two = 0,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

/// Card suit, in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

/// All ranks in ascending order.
pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// All suits in deck order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// Number of cards in a deck.
pub const DECK_SIZE: usize = RANKS.len() * SUITS.len();

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

impl Rank {
    /// Returns the rank index, from 0 (Two) to 12 (Ace).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given index, if it is in `0..=12`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < RANKS.len() {
            Some(RANKS[index as usize])
        } else {
            None
        }
    }

    /// Returns the literal name of the rank, e.g. `"10"` or `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl Suit {
    /// Returns the literal name of the suit, e.g. `"Diamonds"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        RANKS
            .into_iter()
            .find(|rank| rank.name() == token)
            .ok_or(CardError::InvalidValue)
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        SUITS
            .into_iter()
            .find(|suit| suit.name() == token)
            .ok_or(CardError::InvalidSuit)
    }
}

/// A playing card.
///
/// Cards order by rank first, then by suit in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    /// Creates a card from a value token and a suit token.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::{Card, Rank, Suit};
    ///
    /// let card = Card::from_tokens("Jack", "Clubs").unwrap();
    /// assert_eq!(card, Card::new(Rank::Jack, Suit::Clubs));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if either token is not a recognized name.
    pub fn from_tokens(value: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(value.parse()?, suit.parse()?))
    }

    /// Returns the value token of the card, e.g. `"King"`.
    #[must_use]
    pub const fn value(&self) -> &'static str {
        self.rank.name()
    }

    /// Returns the rank index of the card, from 0 (Two) to 12 (Ace).
    #[must_use]
    pub const fn rank_index(&self) -> u8 {
        self.rank.index()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses the canonical `"<value> of <suit>"` form.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, suit) = s
            .trim()
            .split_once(" of ")
            .ok_or(CardError::MissingSeparator)?;
        Self::from_tokens(value, suit)
    }
}

/// Returns the value token of a card.
#[must_use]
pub const fn value(card: &Card) -> &'static str {
    card.value()
}

/// Returns the suit token of a card.
#[must_use]
pub const fn suit(card: &Card) -> &'static str {
    card.suit.name()
}

/// Returns the rank index of a card, from 0 (Two) to 12 (Ace).
///
/// A [`Card`] always holds a valid rank; unrecognized value tokens are
/// rejected earlier, when the card is parsed.
///
/// # Example
///
/// ```
/// use fivecard::card::{rank, Card};
///
/// let ace: Card = "Ace of Hearts".parse().unwrap();
/// assert_eq!(rank(&ace), 12);
/// assert!("Joker of Hearts".parse::<Card>().is_err());
/// ```
#[must_use]
pub const fn rank(card: &Card) -> u8 {
    card.rank_index()
}
