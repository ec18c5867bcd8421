use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::hand::{AceAdjustment, Hand};

fn hand(ranks: &[Rank]) -> Hand {
    let mut h = Hand::new();
    for &r in ranks {
        h.add_card(Card::new(Suit::Hearts, r));
    }
    h
}

fn card_values(h: &Hand) -> Vec<u8> {
    h.cards().iter().map(Card::value).collect()
}

#[test]
fn points_track_every_added_card() {
    let mut h = Hand::new();
    assert_eq!(h.points(), 0);
    h.add_card(Card::new(Suit::Clubs, Rank::King));
    assert_eq!(h.points(), 10);
    h.add_card(Card::new(Suit::Clubs, Rank::Seven));
    assert_eq!(h.points(), 17);
    let sum: u32 = h.cards().iter().map(|c| u32::from(c.value())).sum();
    assert_eq!(h.points(), sum);
}

#[test]
fn ace_counts_eleven_until_it_would_bust() {
    let mut h = hand(&[Rank::Ace, Rank::Six]);
    assert_eq!(h.points(), 17);
    assert!(h.is_soft());
    assert_eq!(h.adjust_aces(), AceAdjustment::Settled(17));
    assert_eq!(card_values(&h), vec![11, 6]);

    h.add_card(Card::new(Suit::Spades, Rank::Nine));
    assert_eq!(h.points(), 26);
    assert_eq!(h.adjust_aces(), AceAdjustment::Settled(16));
    assert!(!h.is_soft());
}

#[test]
fn aces_are_lowered_in_hand_order_and_stop_once_under() {
    // A A 9 = 31 -> first ace to 1 -> 21, second ace keeps 11
    let mut h = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(h.adjust_aces(), AceAdjustment::Settled(21));
    assert_eq!(card_values(&h), vec![1, 11, 9]);
}

#[test]
fn several_aces_lowered_when_needed() {
    // A A A K = 43 -> 33 -> 23 -> 13
    let mut h = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::King]);
    assert_eq!(h.adjust_aces(), AceAdjustment::Settled(13));
    assert_eq!(card_values(&h), vec![1, 1, 1, 10]);
}

#[test]
fn bust_without_aces_is_reported_not_looped() {
    let mut h = hand(&[Rank::King, Rank::Queen, Rank::Five]);
    let adjusted = h.adjust_aces();
    assert_eq!(adjusted, AceAdjustment::Bust(25));
    assert!(adjusted.is_bust());
    assert!(h.is_bust());
}

#[test]
fn bust_after_all_aces_lowered() {
    let mut h = hand(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five]);
    assert_eq!(h.adjust_aces(), AceAdjustment::Bust(26));
    assert_eq!(card_values(&h), vec![1, 10, 10, 5]);
}

#[test]
fn natural_requires_exactly_two_cards() {
    let h = hand(&[Rank::Ace, Rank::King]);
    assert!(h.is_natural());
    let three = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(three.points(), 21);
    assert!(!three.is_natural());
}

#[test]
fn pair_detection_uses_rank() {
    assert!(hand(&[Rank::Eight, Rank::Eight]).is_pair());
    // equal value, different rank
    assert!(!hand(&[Rank::King, Rank::Ten]).is_pair());
}

#[test]
fn reveal_all_turns_hidden_cards_up() {
    let mut h = Hand::new();
    let mut hole = Card::new(Suit::Diamonds, Rank::Ace);
    hole.flip();
    h.add_card(hole);
    h.add_card(Card::new(Suit::Diamonds, Rank::Five));
    assert_eq!(h.points(), 5);
    assert_eq!(h.reveal_all(), 1);
    assert_eq!(h.points(), 16);
    assert_eq!(h.reveal_all(), 0);
}
