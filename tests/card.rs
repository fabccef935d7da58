//! Card model integration tests.

use fivecard::card::{rank, suit, value};
use fivecard::{Card, CardError, DECK_SIZE, RANKS, Rank, SUITS, Suit, build_deck};

#[test]
fn tokens_and_indices() {
    let ten = Card::new(Rank::Ten, Suit::Diamonds);
    assert_eq!(value(&ten), "10");
    assert_eq!(suit(&ten), "Diamonds");
    assert_eq!(rank(&ten), 8);

    assert_eq!(rank(&Card::new(Rank::Two, Suit::Clubs)), 0);
    assert_eq!(rank(&Card::new(Rank::Ace, Suit::Clubs)), 12);

    for (i, r) in RANKS.iter().enumerate() {
        assert_eq!(usize::from(r.index()), i);
        assert_eq!(Rank::from_index(r.index()), Some(*r));
    }
    assert_eq!(Rank::from_index(13), None);
}

#[test]
fn display_uses_canonical_form() {
    assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "Queen of Hearts");
    assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10 of Clubs");
    assert_eq!(Card::new(Rank::Two, Suit::Spades).to_string(), "2 of Spades");
}

#[test]
fn every_card_round_trips() {
    let deck = build_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    for card in deck {
        let text = format!("{} of {}", value(&card), suit(&card));
        assert_eq!(text, card.to_string());
        assert_eq!(text.parse::<Card>(), Ok(card));
        assert_eq!(Card::from_tokens(value(&card), suit(&card)), Ok(card));
    }
}

#[test]
fn parse_rejects_unknown_tokens() {
    assert_eq!("Joker of Spades".parse::<Card>(), Err(CardError::InvalidValue));
    assert_eq!("1 of Spades".parse::<Card>(), Err(CardError::InvalidValue));
    assert_eq!("ace of Spades".parse::<Card>(), Err(CardError::InvalidValue));
    assert_eq!("Ace of Stars".parse::<Card>(), Err(CardError::InvalidSuit));
    assert_eq!("Ace Spades".parse::<Card>(), Err(CardError::MissingSeparator));
    assert_eq!("".parse::<Card>(), Err(CardError::MissingSeparator));

    assert_eq!(Card::from_tokens("T", "Hearts"), Err(CardError::InvalidValue));
    assert_eq!(Card::from_tokens("10", "hearts"), Err(CardError::InvalidSuit));
}

#[test]
fn parse_trims_surrounding_whitespace() {
    assert_eq!(
        "  King of Clubs ".parse::<Card>(),
        Ok(Card::new(Rank::King, Suit::Clubs))
    );
    assert_eq!(" Jack ".parse::<Rank>(), Ok(Rank::Jack));
    assert_eq!("Hearts\n".parse::<Suit>(), Ok(Suit::Hearts));
}

#[test]
fn suits_keep_declared_order() {
    assert_eq!(
        SUITS.map(Suit::name),
        ["Spades", "Hearts", "Diamonds", "Clubs"]
    );
    assert!(Suit::Spades < Suit::Clubs);
}

#[test]
fn cards_order_by_rank_then_suit() {
    let low = Card::new(Rank::Two, Suit::Clubs);
    let high = Card::new(Rank::Three, Suit::Spades);
    assert!(low < high);

    let spade = Card::new(Rank::Nine, Suit::Spades);
    let heart = Card::new(Rank::Nine, Suit::Hearts);
    assert!(spade < heart);
}
