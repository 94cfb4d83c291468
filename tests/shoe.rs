//! Shoe reshuffle-policy and card-supply tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bjtable::{Card, DECK_SIZE, EmptyShoe, Rank, Shoe, Suit, standard_deck};

#[test]
fn standard_deck_holds_every_card_once() {
    let deck = standard_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<_> = deck.iter().map(|card| (card.suit, card.rank)).collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.iter().all(|card| !card.face_up));
}

#[test]
fn shoe_concatenates_decks() {
    assert_eq!(Shoe::new(6).len(), 6 * DECK_SIZE);
}

#[test]
fn deal_sets_orientation_and_counts() {
    let mut shoe = Shoe::new(1);

    let up = shoe.deal(true).unwrap();
    assert!(up.face_up);
    let down = shoe.deal(false).unwrap();
    assert!(!down.face_up);

    assert_eq!(shoe.dealt(), 2);
    assert_eq!(shoe.len(), DECK_SIZE - 2);
}

#[test]
fn empty_shoe_refuses_to_deal() {
    let mut shoe = Shoe::from_cards(Vec::new());
    assert_eq!(shoe.deal(true), Err(EmptyShoe));
}

#[test]
fn small_shoe_is_due_after_first_deal() {
    for decks in 1..4 {
        let mut shoe = Shoe::new(decks);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        shoe.shuffle(&mut rng);
        shoe.deal(true).unwrap();
        assert!(shoe.should_reshuffle(), "{decks} decks");
    }
}

#[test]
fn large_shoe_is_due_at_three_quarters() {
    let mut shoe = Shoe::new(4);
    let marker = 3 * 4 * DECK_SIZE / 4;

    for _ in 0..marker - 1 {
        shoe.deal(true).unwrap();
        assert!(!shoe.should_reshuffle());
    }

    shoe.deal(true).unwrap();
    assert!(shoe.should_reshuffle());
}

#[test]
fn shuffle_resets_the_dealt_count() {
    let mut shoe = Shoe::new(4);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..10 {
        shoe.deal(true).unwrap();
    }
    assert_eq!(shoe.dealt(), 10);

    shoe.shuffle(&mut rng);
    assert_eq!(shoe.dealt(), 0);
    assert!(!shoe.should_reshuffle());
}

#[test]
fn discards_fold_back_in() {
    let mut shoe = Shoe::new(1);
    let mut discards = Vec::new();
    for _ in 0..10 {
        discards.push(shoe.deal(true).unwrap());
    }

    shoe.add_all(discards);
    assert_eq!(shoe.len(), DECK_SIZE);
}

#[test]
fn from_cards_deals_front_first() {
    let mut shoe = Shoe::from_cards(vec![
        Card::new(Suit::Clubs, Rank::Two, false),
        Card::new(Suit::Hearts, Rank::King, false),
    ]);

    assert_eq!(shoe.deal(true).unwrap().rank, Rank::Two);
    assert_eq!(shoe.deal(true).unwrap().rank, Rank::King);
}
