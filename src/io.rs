//! The engine's boundary with the terminal.

use crate::player::{Dealer, Player};

/// Blocking prompt-and-display capability the round engine drives.
///
/// The engine owns all game state and sequencing; implementations only read
/// answers and render snapshots. Every `ask_*` call blocks until the user
/// answers, and only one decision is ever outstanding at a time.
pub trait TableIo {
    /// Asks for an integer in `[min, max]` inclusive, re-prompting until a
    /// valid answer is given.
    fn ask_integer(&mut self, prompt: &str, min: u32, max: u32) -> u32;

    /// Asks a two-way question; returns `first` or `second`. Answers are
    /// case-insensitive.
    fn ask_choice(&mut self, prompt: &str, first: char, second: char) -> char;

    /// Shows a message without pausing.
    fn display(&mut self, text: &str);

    /// Shows a message and waits for acknowledgement.
    fn display_and_wait(&mut self, text: &str);

    /// Redraws the table from read-only state.
    fn refresh(&mut self, dealer: &Dealer, players: &[Player]);
}
