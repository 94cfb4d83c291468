//! A multi-player terminal blackjack table engine.
//!
//! The crate provides a [`Table`] type that drives full rounds, including
//! betting, the initial deal, player decisions (hit, stand, double down,
//! split), dealer play, and settlement. All prompting and rendering go
//! through the [`TableIo`] trait, so the engine itself never touches a
//! terminal.
//!
//! # Example
//!
//! ```
//! use bjtable::{Table, TableConfig};
//!
//! let config = TableConfig::default();
//! let mut table = Table::new(config, 42);
//! table.seat_players(2);
//! assert_eq!(table.players().len(), 2);
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod player;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use config::TableConfig;
pub use error::{ConfigError, EmptyShoe, InsufficientCash, UnsplittableHand};
pub use game::{BLACKJACK, DEALER_STAND, Table};
pub use hand::{Hand, PlayerHand};
pub use io::TableIo;
pub use player::{Dealer, Player};
pub use shoe::Shoe;
