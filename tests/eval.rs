//! Slice-level evaluation tests.

use fivecard::eval::{
    compare_hands, compare_ranks, hand_rank, is_flush, is_straight, is_straight_flush,
    value_counts,
};
use fivecard::{Card, HandError};

fn cards(text: &str) -> Vec<Card> {
    text.split(',').map(|card| card.parse().unwrap()).collect()
}

#[test]
fn hand_rank_examples() {
    let cases = [
        ("2 of Spades, 6 of Spades, Queen of Spades, 7 of Spades, 5 of Hearts", 0),
        ("2 of Spades, 2 of Hearts, Queen of Spades, 7 of Spades, 5 of Hearts", 1),
        ("2 of Spades, 2 of Hearts, Queen of Spades, Queen of Hearts, 5 of Hearts", 2),
        ("2 of Spades, 2 of Hearts, 2 of Diamonds, 7 of Spades, 5 of Hearts", 3),
        ("2 of Spades, 6 of Clubs, 5 of Spades, 3 of Spades, 4 of Spades", 4),
        ("2 of Spades, 6 of Spades, Queen of Spades, 7 of Spades, 5 of Spades", 5),
        ("2 of Spades, 2 of Hearts, 2 of Diamonds, 7 of Spades, 7 of Hearts", 6),
        ("2 of Spades, 2 of Hearts, 2 of Diamonds, 2 of Clubs, 7 of Hearts", 7),
        ("2 of Spades, 3 of Spades, 4 of Spades, 5 of Spades, 6 of Spades", 8),
    ];

    for (text, expected) in cases {
        assert_eq!(hand_rank(&cards(text)), Ok(expected), "{text}");
    }
}

#[test]
fn predicates() {
    let straight = cards("2 of Spades, 6 of Clubs, 5 of Spades, 3 of Spades, 4 of Spades");
    assert_eq!(is_straight(&straight), Ok(true));
    assert_eq!(is_flush(&straight), Ok(false));
    assert_eq!(is_straight_flush(&straight), Ok(false));

    let gap = cards("2 of Spades, 6 of Hearts, 7 of Spades, 4 of Clubs, 5 of Hearts");
    assert_eq!(is_straight(&gap), Ok(false));

    let royal = cards("10 of Hearts, Jack of Hearts, Queen of Hearts, King of Hearts, Ace of Hearts");
    assert_eq!(is_flush(&royal), Ok(true));
    assert_eq!(is_straight_flush(&royal), Ok(true));

    let pair = cards("2 of Spades, 2 of Hearts, Queen of Spades, 7 of Spades, 5 of Hearts");
    assert_eq!(value_counts(&pair), Ok(vec![1, 1, 1, 2]));
}

#[test]
fn comparisons_return_signs() {
    let pair = cards("2 of Spades, 2 of Hearts, Queen of Spades, 7 of Spades, 5 of Hearts");
    let same_ranks = cards("2 of Clubs, 2 of Diamonds, Queen of Hearts, 7 of Clubs, 5 of Spades");
    let trips = cards("2 of Spades, 2 of Hearts, 2 of Diamonds, 7 of Spades, 5 of Hearts");

    assert_eq!(compare_hands(&pair, &trips), Ok(-1));
    assert_eq!(compare_hands(&trips, &pair), Ok(1));
    assert_eq!(compare_hands(&pair, &same_ranks), Ok(0));
    assert_eq!(compare_hands(&pair, &pair), Ok(0));

    assert_eq!(compare_ranks(&pair, &same_ranks), Ok(0));
    // [0, 0, 3, 5, 10] against [0, 0, 0, 3, 5]
    assert_eq!(compare_ranks(&pair, &trips), Ok(1));
    assert_eq!(compare_ranks(&trips, &pair), Ok(-1));

    let seven_high = cards("2 of Spades, 3 of Hearts, 4 of Spades, 5 of Clubs, 7 of Hearts");
    let eight_high = cards("2 of Hearts, 3 of Spades, 4 of Clubs, 5 of Hearts, 8 of Spades");
    assert_eq!(compare_ranks(&seven_high, &eight_high), Ok(-1));
    assert_eq!(compare_ranks(&eight_high, &seven_high), Ok(1));
    assert_eq!(compare_hands(&seven_high, &eight_high), Ok(-1));
}

#[test]
fn wrong_sizes_fail_fast() {
    let four = cards("2 of Spades, 3 of Spades, 4 of Spades, 5 of Spades");
    let five = cards("2 of Spades, 3 of Spades, 4 of Spades, 5 of Spades, 6 of Spades");
    let mut six = five.clone();
    six.push(four[0]);

    let short = Err(HandError::InvalidSize { len: 4 });
    assert_eq!(is_flush(&four), short);
    assert_eq!(is_straight(&four), short);
    assert_eq!(is_straight_flush(&four), short);
    assert_eq!(value_counts(&four), Err(HandError::InvalidSize { len: 4 }));
    assert_eq!(hand_rank(&six), Err(HandError::InvalidSize { len: 6 }));
    assert_eq!(compare_ranks(&five, &six), Err(HandError::InvalidSize { len: 6 }));
    assert_eq!(compare_hands(&four, &five), Err(HandError::InvalidSize { len: 4 }));
}
