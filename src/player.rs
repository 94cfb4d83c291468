//! Player seats and the dealer.

use crate::card::Rank;
use crate::error::{InsufficientCash, UnsplittableHand};
use crate::hand::{Hand, PlayerHand};

/// A seated player: a numbered seat, a cash balance, and one or more hands.
///
/// A seat whose balance drops below the table minimum stops playing but is
/// never vacated or reused within a session.
#[derive(Debug, Clone)]
pub struct Player {
    number: usize,
    cash: u32,
    playing: bool,
    hands: Vec<PlayerHand>,
}

impl Player {
    /// Seats a new player with the given starting balance and one empty
    /// hand.
    #[must_use]
    pub fn new(number: usize, starting_cash: u32) -> Self {
        Self {
            number,
            cash: starting_cash,
            playing: true,
            hands: vec![PlayerHand::new()],
        }
    }

    /// Seat number, fixed for the session.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Spendable balance.
    #[must_use]
    pub const fn cash(&self) -> u32 {
        self.cash
    }

    /// Whether this seat still takes part in rounds.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Marks the seat in or out of play.
    pub const fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// The player's hands for the current round.
    #[must_use]
    pub fn hands(&self) -> &[PlayerHand] {
        &self.hands
    }

    /// Mutable access to the hands.
    pub fn hands_mut(&mut self) -> &mut Vec<PlayerHand> {
        &mut self.hands
    }

    /// Debits `amount` from the balance.
    ///
    /// # Errors
    ///
    /// Fails with [`InsufficientCash`] when `amount` exceeds the balance;
    /// the balance is left untouched.
    pub fn debit(&mut self, amount: u32) -> Result<(), InsufficientCash> {
        if amount > self.cash {
            return Err(InsufficientCash {
                balance: self.cash,
                amount,
            });
        }

        self.cash -= amount;
        Ok(())
    }

    /// Credits `amount` to the balance.
    pub const fn credit(&mut self, amount: u32) {
        self.cash += amount;
    }

    /// Splits the hand at `index`: moves its second card into a fresh hand
    /// carrying an equal wager and debits that wager from the balance. When
    /// the moved card is an ace, both halves are flagged as split aces.
    ///
    /// The new hand is returned; the caller decides where to seat it among
    /// the player's hands.
    ///
    /// # Errors
    ///
    /// Fails with [`UnsplittableHand`] when the hand does not hold exactly
    /// two equal-pip cards or the balance cannot cover the second wager.
    /// Nothing changes on failure.
    pub fn split_hand(&mut self, index: usize) -> Result<PlayerHand, UnsplittableHand> {
        let available = self.cash;
        let hand = self.hands.get_mut(index).ok_or(UnsplittableHand)?;
        if !hand.can_be_split(available) {
            return Err(UnsplittableHand);
        }

        let wager = hand.wager();
        let card = hand.take_second_card().ok_or(UnsplittableHand)?;

        let mut split = PlayerHand::new();
        split.set_wager(wager);
        if card.rank == Rank::Ace {
            hand.set_came_from_split_aces(true);
            split.set_came_from_split_aces(true);
        }
        split.add_card(card);

        // can_be_split already checked the balance covers this.
        self.cash -= wager;
        Ok(split)
    }

    /// Whether any of the player's hands is still active this round.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.hands.iter().any(PlayerHand::is_active)
    }

    /// Replaces all hands with a single empty one for the next round.
    pub fn reset_hands(&mut self) {
        self.hands.clear();
        self.hands.push(PlayerHand::new());
    }
}

/// The dealer: a single plain hand, no wager, no splits.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Mutable access to the dealer's hand.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Whether the dealer holds a natural.
    #[must_use]
    pub fn has_natural(&self) -> bool {
        self.hand.is_natural()
    }
}
