//! Error types for table operations.

use thiserror::Error;

/// A deal was attempted on an exhausted shoe.
///
/// With a correct reshuffle policy this cannot happen mid-round, so callers
/// treat it as an invariant violation: the error is logged and the deal is
/// skipped rather than aborting the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot deal from empty shoe")]
pub struct EmptyShoe;

/// A debit was attempted that exceeds the player's balance.
///
/// Betting, doubling down, and splitting all pre-check the balance; a failed
/// debit leaves the balance untouched and the attempted action is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot debit {amount} from balance {balance}: insufficient funds available")]
pub struct InsufficientCash {
    /// Balance at the time of the attempted debit.
    pub balance: u32,
    /// Amount the debit asked for.
    pub amount: u32,
}

/// A split was requested on a hand that does not satisfy the split
/// invariant: exactly two cards of equal pip value, with the balance
/// covering a second wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hand cannot be split")]
pub struct UnsplittableHand;

/// Errors that can occur while loading table configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key is absent from the source.
    #[error("missing config key `{0}`")]
    MissingKey(&'static str),
    /// A key's value failed to parse.
    #[error("invalid value `{value}` for config key `{key}`")]
    InvalidValue {
        /// The offending key.
        key: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
    /// The config file could not be read.
    #[error("cannot read config file")]
    Io(#[from] std::io::Error),
}
