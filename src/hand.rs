//! Five-card hands, classification, and comparison.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, HAND_SIZE};
use crate::category::HandCategory;
use crate::error::HandError;

/// Facts about a hand that the category rules are written against.
struct Profile {
    flush: bool,
    straight: bool,
    counts: Vec<u8>,
}

impl Profile {
    fn of(hand: &Hand) -> Self {
        Self {
            flush: hand.is_flush(),
            straight: hand.is_straight(),
            counts: hand.value_counts(),
        }
    }

    fn has_count(&self, count: u8) -> bool {
        self.counts.contains(&count)
    }
}

const fn straight_flush(p: &Profile) -> bool {
    p.straight && p.flush
}

fn four_of_a_kind(p: &Profile) -> bool {
    p.has_count(4)
}

fn full_house(p: &Profile) -> bool {
    p.counts == [2, 3]
}

const fn flush(p: &Profile) -> bool {
    p.flush
}

const fn straight(p: &Profile) -> bool {
    p.straight
}

fn three_of_a_kind(p: &Profile) -> bool {
    p.has_count(3)
}

fn two_pair(p: &Profile) -> bool {
    p.counts == [1, 2, 2]
}

fn one_pair(p: &Profile) -> bool {
    p.has_count(2)
}

/// A predicate over a hand profile and the category it selects.
type Rule = (fn(&Profile) -> bool, HandCategory);

/// Category rules in precedence order. The first rule that matches wins;
/// a hand matching none is a high card.
const PRECEDENCE: [Rule; 8] = [
    (straight_flush, HandCategory::StraightFlush),
    (four_of_a_kind, HandCategory::FourOfAKind),
    (full_house, HandCategory::FullHouse),
    (flush, HandCategory::Flush),
    (straight, HandCategory::Straight),
    (three_of_a_kind, HandCategory::ThreeOfAKind),
    (two_pair, HandCategory::TwoPair),
    (one_pair, HandCategory::OnePair),
];

/// A hand of exactly five cards.
///
/// Card order is irrelevant to evaluation. Distinctness is not checked: a
/// hand built from duplicate cards still evaluates deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from a slice of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::{Card, Hand, HandError, Rank, Suit};
    ///
    /// let four = [Card::new(Rank::Two, Suit::Spades); 4];
    /// assert_eq!(Hand::new(&four), Err(HandError::InvalidSize { len: 4 }));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly five cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards = <[Card; HAND_SIZE]>::try_from(cards)
            .map_err(|_| HandError::InvalidSize { len: cards.len() })?;
        Ok(Self { cards })
    }

    /// Creates a hand from an array of five cards.
    #[must_use]
    pub const fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand, in the order they were supplied.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the rank indices of the hand, sorted ascending.
    #[must_use]
    pub fn sorted_ranks(&self) -> [u8; HAND_SIZE] {
        let mut ranks = self.cards.map(|card| card.rank_index());
        ranks.sort_unstable();
        ranks
    }

    /// Returns whether all five cards share a suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Returns whether the ranks form a run of five distinct, contiguous values.
    ///
    /// Aces are high only, so `A 2 3 4 5` is not a straight.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let ranks = self.sorted_ranks();
        let low = ranks[0];
        ranks.map(|rank| rank - low) == [0, 1, 2, 3, 4]
    }

    /// Returns whether the hand is both a straight and a flush.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    /// Returns how many times each distinct rank occurs, sorted ascending.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::Hand;
    ///
    /// let hand: Hand = "King of Spades, King of Hearts, King of Clubs, 4 of Spades, 4 of Hearts"
    ///     .parse()
    ///     .unwrap();
    /// assert_eq!(hand.value_counts(), vec![2, 3]);
    /// ```
    #[must_use]
    pub fn value_counts(&self) -> Vec<u8> {
        let mut tally: HashMap<&'static str, u8> = HashMap::new();
        for card in &self.cards {
            *tally.entry(card.value()).or_insert(0) += 1;
        }

        let mut counts: Vec<u8> = tally.into_values().collect();
        counts.sort_unstable();
        counts
    }

    /// Classifies the hand.
    #[must_use]
    pub fn category(&self) -> HandCategory {
        let profile = Profile::of(self);
        let category = PRECEDENCE
            .iter()
            .find(|(matches, _)| matches(&profile))
            .map_or(HandCategory::HighCard, |&(_, category)| category);

        log::trace!("{self} -> {category}");
        category
    }

    /// Compares the sorted rank indices of two hands position by position,
    /// lowest first. Suits are ignored.
    ///
    /// The first position that differs decides, with the higher rank winning.
    /// This is a plain lexicographic comparison: paired ranks get no priority
    /// over unpaired ones.
    #[must_use]
    pub fn compare_ranks(&self, other: &Self) -> Ordering {
        self.sorted_ranks().cmp(&other.sorted_ranks())
    }

    /// Compares two hands: by category first, then by [`Hand::compare_ranks`].
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use fivecard::Hand;
    ///
    /// let pair: Hand = "2 of Spades, 2 of Hearts, Queen of Spades, 7 of Spades, 5 of Hearts"
    ///     .parse()
    ///     .unwrap();
    /// let high: Hand = "3 of Spades, 6 of Hearts, Queen of Clubs, King of Spades, Ace of Hearts"
    ///     .parse()
    ///     .unwrap();
    /// assert_eq!(pair.compare(&high), Ordering::Greater);
    /// assert_eq!(pair.compare(&pair), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let ordering = self
            .category()
            .cmp(&other.category())
            .then_with(|| self.compare_ranks(other));

        log::trace!("[{self}] vs [{other}]: {ordering:?}");
        ordering
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::from_cards(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parses five comma-separated cards, e.g. `"2 of Spades, Ace of Hearts, ..."`.
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(',')
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }
}
