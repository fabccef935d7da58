//! Error types for card parsing, hand evaluation, and dealing.

use thiserror::Error;

/// Errors that can occur when constructing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The value token is not one of the 13 rank names.
    #[error("invalid card value")]
    InvalidValue,
    /// The suit token is not one of the 4 suit names.
    #[error("invalid card suit")]
    InvalidSuit,
    /// The text is not of the form `<value> of <suit>`.
    #[error("card text is missing the \" of \" separator")]
    MissingSeparator,
}

/// Errors that can occur when evaluating or comparing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not hold exactly five cards.
    #[error("hand must hold exactly 5 cards, got {len}")]
    InvalidSize {
        /// Number of cards supplied.
        len: usize,
    },
    /// One of the cards could not be parsed.
    #[error("invalid card in hand: {0}")]
    Card(#[from] CardError),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for the requested hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
