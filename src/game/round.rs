//! One round: betting, the initial deal, player turns, and dealer play.

use std::collections::VecDeque;

use log::error;

use super::{
    BLACKJACK, DEALER_HAS_NATURAL, DEALER_STAND, DEALER_WILL_PLAY, ENTER_BET, HIT_OR_STAND,
    PLAYER_HAS_NATURAL, Table, TWO_CARDS_WILL_BE_DEALT, WANT_TO_DOUBLE, WANT_TO_SPLIT,
    WILL_REVEAL_CARDS,
};
use crate::io::TableIo;

impl Table {
    /// Plays one full round: bets, initial deal, player turns, and the
    /// dealer's turn. Settlement is separate ([`Table::settle`]) so the
    /// final table can be shown between the two.
    pub fn play_round(&mut self, io: &mut impl TableIo) {
        self.take_bets(io);

        io.display_and_wait(TWO_CARDS_WILL_BE_DEALT);
        self.deal_initial();
        io.refresh(&self.dealer, &self.players);

        if self.dealer.has_natural() {
            // Show the hole card; the round goes straight to settlement.
            self.reveal_dealer_hole();
            io.display_and_wait(DEALER_HAS_NATURAL);
            return;
        }

        self.players_play(io);
        io.display_and_wait(WILL_REVEAL_CARDS);

        self.reveal_dealer_hole();
        self.reveal_double_down_cards();
        io.refresh(&self.dealer, &self.players);

        if self.any_active_hand() && self.dealer.hand().value() < DEALER_STAND {
            io.display_and_wait(DEALER_WILL_PLAY);
            self.dealer_play();
        }
    }

    /// Collects a wager from every playing seat. A seat that cannot cover
    /// the minimum bet stops playing for the rest of the session.
    fn take_bets(&mut self, io: &mut impl TableIo) {
        let min_bet = self.config.min_bet;

        for player in &mut self.players {
            if !player.is_playing() {
                continue;
            }

            if player.cash() < min_bet {
                player.set_playing(false);
                continue;
            }

            let prompt = format!("Player {}, {}", player.number(), ENTER_BET);
            let amount = io.ask_integer(&prompt, min_bet, player.cash());

            player.hands_mut()[0].set_wager(amount);
            if let Err(err) = player.debit(amount) {
                // The prompt range guards this; abandon the bet if it trips.
                error!("{err}");
                player.hands_mut()[0].set_wager(0);
            }
        }
    }

    /// One card face up to every playing seat, the dealer's up card, a
    /// second card to every seat, and finally the dealer's hole card.
    fn deal_initial(&mut self) {
        self.deal_one_to_each_player();
        self.deal_to_dealer(true);
        self.deal_one_to_each_player();
        self.deal_to_dealer(false);
    }

    fn deal_one_to_each_player(&mut self) {
        for player in &mut self.players {
            if !player.is_playing() {
                continue;
            }
            match self.shoe.deal(true) {
                Ok(card) => player.hands_mut()[0].add_card(card),
                Err(err) => error!("initial deal: {err}"),
            }
        }
    }

    fn deal_to_dealer(&mut self, face_up: bool) {
        match self.shoe.deal(face_up) {
            Ok(card) => self.dealer.hand_mut().add_card(card),
            Err(err) => error!("dealer deal: {err}"),
        }
    }

    fn reveal_dealer_hole(&mut self) {
        if let Some(card) = self.dealer.hand_mut().cards_mut().get_mut(1) {
            card.face_up = true;
        }
    }

    /// Flips the face-down third card on every doubled-down hand.
    fn reveal_double_down_cards(&mut self) {
        for player in &mut self.players {
            if !player.is_playing() {
                continue;
            }
            for hand in player.hands_mut().iter_mut() {
                if hand.is_double_down() {
                    if let Some(card) = hand.cards_mut().last_mut() {
                        card.face_up = true;
                    }
                }
            }
        }
    }

    fn any_active_hand(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.is_playing() && player.is_active())
    }

    /// Player turn phase: every playing seat decides each of its hands, in
    /// seat order.
    fn players_play(&mut self, io: &mut impl TableIo) {
        for index in 0..self.players.len() {
            if !self.players[index].is_playing() {
                continue;
            }
            self.player_turn(index, io);
            io.refresh(&self.dealer, &self.players);
        }
    }

    /// Decides all of one player's hands.
    ///
    /// Hands pending a decision sit in an index worklist. A split re-queues
    /// the reduced original hand in front of the new one, so a pair can be
    /// split again; everything else resolves the popped hand exactly once.
    /// Splits are capped at `max_splits` per player per round, which bounds
    /// the worklist and guarantees the loop drains.
    fn player_turn(&mut self, player_index: usize, io: &mut impl TableIo) {
        let mut split_count = 0;
        let mut pending: VecDeque<usize> = VecDeque::from([0]);

        while let Some(hand_index) = pending.pop_front() {
            if split_count < self.config.max_splits && self.try_split(player_index, hand_index, io)
            {
                split_count += 1;
                // The new hand sits at hand_index + 1; queued indices past
                // the split point shift right with it.
                for queued in &mut pending {
                    if *queued > hand_index {
                        *queued += 1;
                    }
                }
                pending.push_front(hand_index + 1);
                pending.push_front(hand_index);
                continue;
            }

            self.play_hand(player_index, hand_index, io);
        }
    }

    /// Offers a split when the hand and balance allow it and the player
    /// accepts. Returns whether a split happened.
    fn try_split(&mut self, player_index: usize, hand_index: usize, io: &mut impl TableIo) -> bool {
        let player = &self.players[player_index];
        let hand = &player.hands()[hand_index];
        if !hand.can_be_split(player.cash()) {
            return false;
        }

        let prompt = format!("Player {}, {}\n\t{}", player.number(), WANT_TO_SPLIT, hand);
        if io.ask_choice(&prompt, 'y', 'n') != 'y' {
            return false;
        }

        match self.players[player_index].split_hand(hand_index) {
            Ok(split) => {
                self.players[player_index]
                    .hands_mut()
                    .insert(hand_index + 1, split);

                // One more card on top of each half, face up.
                for offset in 0..2 {
                    match self.shoe.deal(true) {
                        Ok(card) => self.players[player_index].hands_mut()[hand_index + offset]
                            .add_card(card),
                        Err(err) => error!("split deal: {err}"),
                    }
                }
                true
            }
            Err(err) => {
                // Eligibility was checked above; refuse the split and play
                // the hand as it stands.
                error!("{err}");
                false
            }
        }
    }

    /// Resolves a single hand: split-ace hands get no say, naturals are
    /// credited immediately, and the rest may double down or hit.
    fn play_hand(&mut self, player_index: usize, hand_index: usize, io: &mut impl TableIo) {
        let player = &self.players[player_index];
        let hand = &player.hands()[hand_index];

        if hand.came_from_split_aces() {
            // One card was dealt on the split; the player gets no say here.
            return;
        }

        if hand.is_natural() {
            io.display_and_wait(&format!(
                "Player {} {}",
                player.number(),
                PLAYER_HAS_NATURAL
            ));
            let factor = self.config.natural_payout_factor;
            let hand = &mut self.players[player_index].hands_mut()[hand_index];
            let bonus = (factor * f64::from(hand.wager())).round() as u32;
            hand.set_wager(hand.wager() + bonus);
            return;
        }

        if player.cash() >= hand.wager() && hand.value() < BLACKJACK {
            let prompt = format!("Player {}, {}\n\t{}", player.number(), WANT_TO_DOUBLE, hand);
            if io.ask_choice(&prompt, 'y', 'n') == 'y' {
                self.double_down(player_index, hand_index);
                return;
            }
        }

        // Plain hits until the player stands, busts, or reaches 21.
        loop {
            let player = &self.players[player_index];
            let hand = &player.hands()[hand_index];
            if hand.value() >= BLACKJACK {
                break;
            }

            let prompt = format!("Player {}, {}\n\t{}", player.number(), HIT_OR_STAND, hand);
            if io.ask_choice(&prompt, 'h', 's') != 'h' {
                break;
            }

            match self.shoe.deal(true) {
                Ok(card) => self.players[player_index].hands_mut()[hand_index].add_card(card),
                Err(err) => {
                    error!("hit: {err}");
                    break;
                }
            }
        }
    }

    /// Doubles the wager, debits the balance, and deals the one final card
    /// face down. The card stays hidden until the reveal.
    fn double_down(&mut self, player_index: usize, hand_index: usize) {
        let wager = self.players[player_index].hands()[hand_index].wager();

        if let Err(err) = self.players[player_index].debit(wager) {
            // Guarded by the balance check at the offer; abandon the action.
            error!("{err}");
            return;
        }

        {
            let hand = &mut self.players[player_index].hands_mut()[hand_index];
            hand.set_wager(2 * wager);
            hand.set_double_down(true);
        }

        match self.shoe.deal(false) {
            Ok(card) => self.players[player_index].hands_mut()[hand_index].add_card(card),
            Err(err) => error!("double down: {err}"),
        }
    }

    /// Dealer draws face up until reaching the stand threshold. A 21 or a
    /// bust exits the loop the same way a plain stand does.
    fn dealer_play(&mut self) {
        while self.dealer.hand().value() < DEALER_STAND {
            match self.shoe.deal(true) {
                Ok(card) => self.dealer.hand_mut().add_card(card),
                Err(err) => {
                    // An exhausted shoe mid-draw means the reshuffle policy
                    // was broken; stop drawing rather than spin.
                    error!("dealer draw: {err}");
                    break;
                }
            }
        }
    }
}
