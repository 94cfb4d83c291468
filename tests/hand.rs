//! Hand valuation and split-eligibility tests.

use bjtable::{Card, Hand, PlayerHand, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank, true)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(Suit::Clubs, rank));
    }
    hand
}

fn player_hand(first: Rank, second: Rank, wager: u32) -> PlayerHand {
    let mut hand = PlayerHand::new();
    hand.add_card(card(Suit::Clubs, first));
    hand.add_card(card(Suit::Spades, second));
    hand.set_wager(wager);
    hand
}

#[test]
fn empty_hand_is_worth_zero() {
    assert_eq!(hand_of(&[]).value(), 0);
}

#[test]
fn single_card_values() {
    assert_eq!(hand_of(&[Rank::Two]).value(), 2);
    assert_eq!(hand_of(&[Rank::King]).value(), 10);
    assert_eq!(hand_of(&[Rank::Ace]).value(), 11);
}

#[test]
fn two_aces_are_twelve() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).value(), 12);
}

#[test]
fn two_aces_and_a_ten_are_twelve() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Ten]).value(), 12);
}

#[test]
fn three_aces_are_thirteen() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace]).value(), 13);
}

#[test]
fn ace_and_court_card_is_natural() {
    let hand = hand_of(&[Rank::Ace, Rank::King]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_natural());
}

#[test]
fn twenty_one_in_three_cards_is_not_natural() {
    let hand = hand_of(&[Rank::Ace, Rank::Five, Rank::Five]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_natural());
}

#[test]
fn two_card_twenty_is_not_natural() {
    assert!(!hand_of(&[Rank::Ten, Rank::Queen]).is_natural());
}

#[test]
fn split_allowed_for_equal_ranks() {
    assert!(player_hand(Rank::Two, Rank::Two, 10).can_be_split(10));
}

#[test]
fn split_allowed_for_equal_pips_across_ranks() {
    // A ten and a queen are both worth 10, which is all that matters.
    assert!(player_hand(Rank::Ten, Rank::Queen, 10).can_be_split(10));
}

#[test]
fn split_refused_for_mismatched_pips() {
    assert!(!player_hand(Rank::Three, Rank::Two, 10).can_be_split(1000));
}

#[test]
fn split_refused_without_funds() {
    assert!(!player_hand(Rank::Two, Rank::Two, 20).can_be_split(10));
}

#[test]
fn split_refused_after_a_hit() {
    let mut hand = player_hand(Rank::Two, Rank::Two, 10);
    hand.add_card(card(Suit::Hearts, Rank::Two));
    assert!(!hand.can_be_split(1000));
}

#[test]
fn naturals_and_busts_are_not_active() {
    assert!(player_hand(Rank::Ten, Rank::Nine, 10).is_active());
    assert!(!player_hand(Rank::Ace, Rank::King, 10).is_active());

    let mut bust = player_hand(Rank::Ten, Rank::Ten, 10);
    bust.add_card(card(Suit::Hearts, Rank::Five));
    assert!(!bust.is_active());
}

#[test]
fn reset_clears_cards_wager_and_flags() {
    let mut hand = player_hand(Rank::Ace, Rank::Ace, 10);
    hand.set_double_down(true);
    hand.set_came_from_split_aces(true);

    hand.reset();

    assert!(hand.cards().is_empty());
    assert_eq!(hand.wager(), 0);
    assert!(!hand.is_double_down());
    assert!(!hand.came_from_split_aces());
}
