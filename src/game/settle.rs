//! Settlement: resolving wagers against the dealer's outcome.

use super::{BLACKJACK, Table};
use crate::hand::PlayerHand;

/// Amount returned to the player for one hand, stake included.
///
/// A natural hand's wager already carries the bonus credited during the
/// player turn, so every branch returns it at face value rather than paying
/// it again. A dealer who reached 21 by drawing resolves under the
/// non-natural-21 arm, not the stand arm.
fn hand_payout(hand: &PlayerHand, dealer_value: u8, dealer_natural: bool) -> u32 {
    let wager = hand.wager();

    if dealer_natural {
        // Only naturals push; everything else is collected.
        if hand.is_natural() { wager } else { 0 }
    } else if dealer_value == BLACKJACK {
        // Dealer made 21 without a natural: 21s push, the rest lose.
        if hand.value() == BLACKJACK { wager } else { 0 }
    } else if dealer_value > BLACKJACK {
        // Dealer bust: every surviving hand wins.
        if hand.is_active() {
            2 * wager
        } else if hand.is_natural() {
            wager
        } else {
            0
        }
    } else if hand.is_active() && hand.value() > dealer_value {
        // Dealer stands somewhere in 17..=20.
        2 * wager
    } else if hand.is_natural() || hand.value() == dealer_value {
        wager
    } else {
        0
    }
}

impl Table {
    /// Resolves every wager against the dealer's outcome, then moves all
    /// cards (players' and dealer's) to the discard pile and resets every
    /// hand. The discard-and-reset step is unconditional, independent of
    /// how the round went.
    pub fn settle(&mut self) {
        let dealer_value = self.dealer.hand().value();
        let dealer_natural = self.dealer.has_natural();

        for player in &mut self.players {
            if !player.is_playing() {
                continue;
            }

            let mut returned = 0;
            for hand in player.hands_mut().iter_mut() {
                returned += hand_payout(hand, dealer_value, dealer_natural);
                self.discard.extend(hand.take_cards());
            }

            player.credit(returned);
            player.reset_hands();
        }

        self.discard.extend(self.dealer.hand_mut().take_cards());

        // Every card is either in the shoe or the discard pile once the
        // round settles.
        debug_assert_eq!(
            self.discard.len() + self.shoe.len(),
            self.total_cards,
            "cards unaccounted for after settlement",
        );
    }
}
