//! Hand valuation and per-hand wager state.

use core::fmt;

use crate::card::{Card, Rank};
use crate::game::BLACKJACK;

/// Pip sum with the soft-ace rule: aces count 1, and one ace is promoted to
/// 11 (by adding 10 once) whenever the hand holds an ace and the promotion
/// cannot bust it. Promoting more than one ace would always bust, so a
/// single promotion is exact for any number of aces.
fn value_of(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        value = value.saturating_add(card.pip_value());
        if card.rank == Rank::Ace {
            has_ace = true;
        }
    }

    if has_ace && value <= 11 {
        value += 10;
    }

    value
}

/// An ordered sequence of cards with the blackjack value rule.
///
/// Order matters for display only; the value is order-independent. The
/// dealer plays a plain `Hand`; players wrap one in a [`PlayerHand`].
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the back of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The cards currently held.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Mutable access to the cards, for flipping orientations.
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// The hand's value under the soft-ace rule.
    #[must_use]
    pub fn value(&self) -> u8 {
        value_of(&self.cards)
    }

    /// A natural: exactly two cards totalling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drains every card out of the hand, e.g. into the discard pile.
    pub fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }
}

impl fmt::Display for Hand {
    /// Cards separated by spaces; the value is appended only when every
    /// card is face up, so a printed hand never gives away a hidden card.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("no cards");
        }

        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }

        if self.cards.iter().all(|card| card.face_up) {
            write!(f, "  value {}", self.value())?;
        }

        Ok(())
    }
}

/// A player's hand: a [`Hand`] plus the wager riding on it and the
/// double-down / split-lineage state settlement needs.
///
/// Composition rather than subtyping: the round engine reads the inner hand
/// for value and natural checks and this wrapper for everything wager-side.
#[derive(Debug, Clone, Default)]
pub struct PlayerHand {
    hand: Hand,
    wager: u32,
    double_down: bool,
    from_split_aces: bool,
}

impl PlayerHand {
    /// Creates an empty hand with no wager.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            wager: 0,
            double_down: false,
            from_split_aces: false,
        }
    }

    /// Shared access to the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a card to the back of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// The cards currently held.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Mutable access to the cards, for flipping orientations.
    pub fn cards_mut(&mut self) -> &mut [Card] {
        self.hand.cards_mut()
    }

    /// The hand's value under the soft-ace rule.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// A natural: exactly two cards totalling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.hand.is_natural()
    }

    /// Still contending for a payout: neither a natural nor a bust.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_natural() && self.value() <= BLACKJACK
    }

    /// Whether the hand may be split: exactly two cards of equal pip value,
    /// with `available` covering a second wager equal to the current one.
    /// A ten and a queen are splittable; a three and a deuce are not.
    #[must_use]
    pub fn can_be_split(&self, available: u32) -> bool {
        let cards = self.hand.cards();
        cards.len() == 2
            && available >= self.wager
            && cards[0].pip_value() == cards[1].pip_value()
    }

    /// The wager riding on this hand. After a natural is credited, the
    /// amount carries both the stake and the bonus.
    #[must_use]
    pub const fn wager(&self) -> u32 {
        self.wager
    }

    /// Sets the wager.
    pub const fn set_wager(&mut self, wager: u32) {
        self.wager = wager;
    }

    /// Whether the hand was doubled down.
    #[must_use]
    pub const fn is_double_down(&self) -> bool {
        self.double_down
    }

    /// Marks the hand as doubled down.
    pub const fn set_double_down(&mut self, double_down: bool) {
        self.double_down = double_down;
    }

    /// Whether the hand descends from a split pair of aces. Such hands get
    /// one extra card and no further player decisions.
    #[must_use]
    pub const fn came_from_split_aces(&self) -> bool {
        self.from_split_aces
    }

    /// Flags the hand as descending from split aces.
    pub const fn set_came_from_split_aces(&mut self, from_split_aces: bool) {
        self.from_split_aces = from_split_aces;
    }

    /// Removes the second card for a split. Callers verify
    /// [`can_be_split`](Self::can_be_split) first.
    pub(crate) fn take_second_card(&mut self) -> Option<Card> {
        if self.hand.cards.len() == 2 {
            Some(self.hand.cards.remove(1))
        } else {
            None
        }
    }

    /// Drains every card out of the hand, e.g. into the discard pile.
    pub fn take_cards(&mut self) -> Vec<Card> {
        self.hand.take_cards()
    }

    /// Clears the cards, wager, and flags for the next round.
    pub fn reset(&mut self) {
        self.hand.cards.clear();
        self.wager = 0;
        self.double_down = false;
        self.from_split_aces = false;
    }
}

impl fmt::Display for PlayerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  wager ${}", self.hand, self.wager)
    }
}
