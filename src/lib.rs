//! A five-card poker hand evaluator with optional `no_std` support.
//!
//! The crate builds and shuffles a standard 52-card deck, classifies
//! five-card hands into categories from high card to straight flush, and
//! orders hands by category and rank.
//!
//! # Example
//!
//! ```
//! use core::cmp::Ordering;
//! use fivecard::{Hand, HandCategory};
//!
//! let straight: Hand = "2 of Spades, 6 of Clubs, 5 of Spades, 3 of Spades, 4 of Spades"
//!     .parse()
//!     .unwrap();
//! let trips: Hand = "9 of Spades, 9 of Hearts, 9 of Clubs, Ace of Spades, King of Hearts"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(straight.category(), HandCategory::Straight);
//! assert_eq!(straight.compare(&trips), Ordering::Greater);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, RANKS, Rank, SUITS, Suit};
pub use category::HandCategory;
#[cfg(feature = "std")]
pub use deck::deal_hand;
pub use deck::{Dealer, build_deck, shuffle};
pub use error::{CardError, DealError, HandError};
pub use hand::Hand;
