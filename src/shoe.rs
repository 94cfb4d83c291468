//! The dealer's shoe and its reshuffle policy.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::EmptyShoe;

/// A card supply built from one or more decks.
///
/// Cards are dealt from the front, so a shuffle fully determines the deal
/// order. A marker at the three-quarter position (four decks or more) tracks
/// when the shoe is due for a reshuffle; with fewer decks the marker sits at
/// the front and the shoe reports itself due as soon as a card has been
/// dealt, which makes the caller reshuffle between every round. That is
/// table policy for small shoes, not an accident.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: VecDeque<Card>,
    reshuffle_marker: usize,
    dealt: usize,
}

impl Shoe {
    /// Builds a shoe of `decks` concatenated fresh decks, all face down.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::new(6);
    /// assert_eq!(shoe.len(), 6 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(decks: usize) -> Self {
        let mut cards = VecDeque::with_capacity(decks * DECK_SIZE);
        for _ in 0..decks {
            cards.extend(standard_deck());
        }
        Self::with_marker(cards)
    }

    /// Builds a shoe from an explicit card sequence, preserving its order.
    ///
    /// Deals come from the front of `cards`, so the sequence fully scripts
    /// the rounds played from it.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self::with_marker(cards.into())
    }

    fn with_marker(cards: VecDeque<Card>) -> Self {
        // Four decks or more get the marker at the 3/4 position; smaller
        // shoes keep it at the front so every round triggers a reshuffle.
        let reshuffle_marker = if cards.len() >= 4 * DECK_SIZE {
            3 * cards.len() / 4
        } else {
            0
        };
        Self {
            cards,
            reshuffle_marker,
            dealt: 0,
        }
    }

    /// Randomly permutes the remaining cards and resets the dealt count.
    ///
    /// The reshuffle marker keeps its position.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.make_contiguous().shuffle(rng);
        self.dealt = 0;
    }

    /// Deals the front card with the requested orientation.
    ///
    /// # Errors
    ///
    /// Fails with [`EmptyShoe`] when no cards remain.
    pub fn deal(&mut self, face_up: bool) -> Result<Card, EmptyShoe> {
        let mut card = self.cards.pop_front().ok_or(EmptyShoe)?;
        card.face_up = face_up;
        self.dealt += 1;
        Ok(card)
    }

    /// Whether enough cards have been dealt to pass the reshuffle marker.
    #[must_use]
    pub const fn should_reshuffle(&self) -> bool {
        self.dealt >= self.reshuffle_marker
    }

    /// Appends cards (typically the discard pile) without shuffling.
    ///
    /// Callers are expected to shuffle before dealing again.
    pub fn add_all<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the shoe holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards dealt since the last shuffle.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.dealt
    }
}
