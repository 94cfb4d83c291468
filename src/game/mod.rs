//! The round engine: table state ownership and the session loop.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::config::TableConfig;
use crate::io::TableIo;
use crate::player::{Dealer, Player};
use crate::shoe::Shoe;

mod round;
mod settle;

/// Hand value a blackjack is worth.
pub const BLACKJACK: u8 = 21;

/// The dealer draws below this value and stands at or above it.
pub const DEALER_STAND: u8 = 17;

// Session and round messages, kept in one place for consistent wording.
const WELCOME: &str = "Welcome to the blackjack table!";
const ENTER_NUM_PLAYERS: &str = "Please enter a number of players";
const ENTER_BET: &str = "please enter your bet";
const TWO_CARDS_WILL_BE_DEALT: &str = "Two cards will now be dealt to each player.";
const DEALER_HAS_NATURAL: &str =
    "The dealer has a natural! All hands that are not naturals lose.";
const PLAYER_HAS_NATURAL: &str = "has a natural! The payout is added to the wager immediately.";
const WANT_TO_SPLIT: &str = "would you like to split this hand?";
const WANT_TO_DOUBLE: &str = "would you like to double down on this hand?";
const HIT_OR_STAND: &str = "would you like to hit or stand on this hand?";
const WILL_REVEAL_CARDS: &str = "Hidden cards will now be flipped.";
const DEALER_WILL_PLAY: &str = "The dealer will now play.";
const ROUND_IS_OVER: &str = "The round is over! The final table is shown above.";
const BALANCES_HEADER: &str = "Current player balances:";
const OUT_OF_MONEY: &str =
    "No player has enough money left to play. The game will now end, thanks for playing!";
const CONTINUE_PROMPT: &str = "Would you like to play one more round?";
const THANKS: &str = "Thanks for playing!";

/// A blackjack table: the shoe, the discard pile, the seated players, and
/// the dealer, driven round by round against a [`TableIo`] front end.
///
/// Everything is exclusively owned and mutated on the calling thread; the
/// only suspension points are the blocking prompts.
pub struct Table {
    config: TableConfig,
    shoe: Shoe,
    discard: Vec<Card>,
    players: Vec<Player>,
    dealer: Dealer,
    rng: ChaCha8Rng,
    /// Cards in circulation across shoe, hands, and discard pile.
    total_cards: usize,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// The seed fully determines the shuffle sequence for the session.
    #[must_use]
    pub fn new(config: TableConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new(config.decks as usize);
        shoe.shuffle(&mut rng);
        let total_cards = shoe.len();

        Self {
            config,
            shoe,
            discard: Vec::new(),
            players: Vec::new(),
            dealer: Dealer::new(),
            rng,
            total_cards,
        }
    }

    /// Seats `count` players, each with the configured starting balance.
    ///
    /// Seats are numbered in order and never reused within a session.
    pub fn seat_players(&mut self, count: u32) {
        for _ in 0..count {
            let number = self.players.len();
            self.players
                .push(Player::new(number, self.config.starting_cash));
        }
    }

    /// Replaces the card supply, e.g. to play from a known card order.
    ///
    /// The discard pile is emptied alongside.
    pub fn set_shoe(&mut self, shoe: Shoe) {
        self.total_cards = shoe.len();
        self.shoe = shoe;
        self.discard.clear();
    }

    /// The table rules in effect.
    #[must_use]
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The seated players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// The card supply.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Number of cards currently in the discard pile.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    /// Runs a full session: seats players, then plays rounds until no seat
    /// can cover the minimum bet or the user stops. Returns cleanly in
    /// either case, with balances displayed first.
    pub fn run(&mut self, io: &mut impl TableIo) {
        io.display(WELCOME);
        let count = io.ask_integer(
            ENTER_NUM_PLAYERS,
            self.config.min_players,
            self.config.max_players,
        );
        self.seat_players(count);

        loop {
            self.play_round(io);

            io.refresh(&self.dealer, &self.players);
            io.display_and_wait(ROUND_IS_OVER);

            self.settle();

            if !self.any_player_can_continue() {
                io.display(OUT_OF_MONEY);
                self.display_balances(io);
                return;
            }

            io.display(BALANCES_HEADER);
            self.display_balances(io);

            if io.ask_choice(CONTINUE_PROMPT, 'y', 'n') != 'y' {
                io.display(THANKS);
                return;
            }

            if self.shoe.should_reshuffle() {
                self.shoe.add_all(self.discard.drain(..));
                self.shoe.shuffle(&mut self.rng);
                debug!("shoe reshuffled, {} cards", self.shoe.len());
            }
        }
    }

    fn any_player_can_continue(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.is_playing() && player.cash() >= self.config.min_bet)
    }

    fn display_balances(&self, io: &mut impl TableIo) {
        for player in &self.players {
            io.display(&format!("Player {}:  ${}", player.number(), player.cash()));
        }
    }
}
