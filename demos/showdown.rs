//! Deals two hands and shows which one wins.
//!
//! Pass a seed as the first argument to replay a deal. Set `RUST_LOG=trace`
//! to see each classification.

use core::cmp::Ordering;
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use fivecard::{Dealer, Hand};

fn main() {
    env_logger::init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Seed: {seed}");

    let mut dealer = Dealer::new(seed);
    let hands = match dealer.deal_hands(2) {
        Ok(hands) => hands,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    for (i, hand) in hands.iter().enumerate() {
        print_hand(&format!("Player {}", i + 1), hand);
    }

    match hands[0].compare(&hands[1]) {
        Ordering::Greater => println!("Player 1 wins."),
        Ordering::Less => println!("Player 2 wins."),
        Ordering::Equal => println!("Split pot."),
    }
}

fn print_hand(label: &str, hand: &Hand) {
    println!("{label}: {hand}");
    println!("  {} (category {})", hand.category(), hand.category().ordinal());
}
