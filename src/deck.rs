//! Deck construction, shuffling, and dealing.

extern crate alloc;

use alloc::vec::Vec;
use core::array;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, RANKS, SUITS};
use crate::error::DealError;
use crate::hand::Hand;

/// Builds an ordered 52-card deck.
///
/// Cards run through every rank in ascending order for each suit in deck
/// order, so the deck starts with the 2 of Spades and ends with the Ace of
/// Clubs.
///
/// # Example
///
/// ```
/// let deck = fivecard::build_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0].to_string(), "2 of Spades");
/// assert_eq!(deck[51].to_string(), "Ace of Clubs");
/// ```
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Returns a uniformly random permutation of `deck`, leaving `deck` untouched.
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Deals hands from freshly shuffled decks.
///
/// A dealer owns a seeded random number generator, so two dealers created
/// with the same seed deal the same cards.
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a new dealer with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::Dealer;
    ///
    /// let mut dealer = Dealer::new(42);
    /// let hand = dealer.deal_hand();
    /// assert_eq!(hand.cards().len(), 5);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        log::debug!("dealer seeded with {seed}");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a new dealer seeded from the operating system's entropy source.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        log::debug!("dealer seeded from os entropy");
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Returns a freshly built and shuffled deck.
    pub fn shuffled_deck(&mut self) -> Vec<Card> {
        shuffle(&build_deck(), &mut self.rng)
    }

    /// Shuffles a fresh deck and returns its first five cards.
    pub fn deal_hand(&mut self) -> Hand {
        let deck = self.shuffled_deck();
        let hand = Hand::from_cards(array::from_fn(|i| deck[i]));
        log::debug!("dealt {hand}");
        hand
    }

    /// Shuffles a fresh deck and deals `count` hands from it, five cards each.
    ///
    /// The hands never share a card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot supply `count` hands.
    pub fn deal_hands(&mut self, count: usize) -> Result<Vec<Hand>, DealError> {
        let needed = count
            .checked_mul(HAND_SIZE)
            .ok_or(DealError::NotEnoughCards)?;
        if needed > DECK_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        let deck = self.shuffled_deck();
        let hands: Vec<Hand> = deck[..needed]
            .chunks_exact(HAND_SIZE)
            .map(|chunk| Hand::from_cards(array::from_fn(|i| chunk[i])))
            .collect();

        log::debug!("dealt {} hands", hands.len());
        Ok(hands)
    }
}

/// Deals a single hand from a freshly shuffled deck, using a dealer seeded
/// from os entropy.
///
/// Use [`Dealer`] directly for reproducible deals.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn deal_hand() -> Hand {
    Dealer::from_entropy().deal_hand()
}
