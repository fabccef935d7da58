//! Slice-level evaluation functions.
//!
//! These accept any card slice and validate its size before evaluating,
//! failing with [`HandError::InvalidSize`] when it does not hold exactly five
//! cards. Comparisons return `1`, `0`, or `-1` for a win, a tie, or a loss of
//! the first hand. Code that already holds a [`Hand`] can call its methods
//! directly.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;
use crate::hand::Hand;

/// Returns whether all five cards share a suit.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly five cards.
pub fn is_flush(cards: &[Card]) -> Result<bool, HandError> {
    Ok(Hand::new(cards)?.is_flush())
}

/// Returns whether the cards form a run of five distinct, contiguous ranks.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly five cards.
pub fn is_straight(cards: &[Card]) -> Result<bool, HandError> {
    Ok(Hand::new(cards)?.is_straight())
}

/// Returns whether the cards are both a straight and a flush.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly five cards.
pub fn is_straight_flush(cards: &[Card]) -> Result<bool, HandError> {
    Ok(Hand::new(cards)?.is_straight_flush())
}

/// Returns how many times each distinct rank occurs, sorted ascending.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly five cards.
pub fn value_counts(cards: &[Card]) -> Result<Vec<u8>, HandError> {
    Ok(Hand::new(cards)?.value_counts())
}

/// Returns the category ordinal of the hand, from 0 (high card) to 8
/// (straight flush).
///
/// # Example
///
/// ```
/// use fivecard::{build_deck, eval};
///
/// let deck = build_deck();
/// // 2 through 6 of Spades.
/// assert_eq!(eval::hand_rank(&deck[..5]), Ok(8));
/// assert!(eval::hand_rank(&deck[..4]).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly five cards.
pub fn hand_rank(cards: &[Card]) -> Result<u8, HandError> {
    Ok(Hand::new(cards)?.category().ordinal())
}

/// Compares the sorted rank indices of two hands, ignoring suits.
///
/// # Errors
///
/// Returns an error if either slice does not hold exactly five cards.
pub fn compare_ranks(a: &[Card], b: &[Card]) -> Result<i8, HandError> {
    let (a, b) = (Hand::new(a)?, Hand::new(b)?);
    Ok(a.compare_ranks(&b) as i8)
}

/// Compares two hands by category, then by sorted rank indices.
///
/// # Errors
///
/// Returns an error if either slice does not hold exactly five cards.
pub fn compare_hands(a: &[Card], b: &[Card]) -> Result<i8, HandError> {
    let (a, b) = (Hand::new(a)?, Hand::new(b)?);
    Ok(a.compare(&b) as i8)
}
