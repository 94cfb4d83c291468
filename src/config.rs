//! Table configuration and the key=value loader.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;

/// Table rules and limits, loaded once at startup.
///
/// Use the builder pattern to customize a config in code:
///
/// ```
/// use bjtable::TableConfig;
///
/// let config = TableConfig::default()
///     .with_decks(8)
///     .with_min_bet(10)
///     .with_natural_payout_factor(1.2);
/// ```
///
/// or load one from a `key=value` file with [`TableConfig::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Fewest seats a session may open with.
    pub min_players: u32,
    /// Most seats a session may open with.
    pub max_players: u32,
    /// Decks combined into the shoe.
    pub decks: u32,
    /// Minimum wager; doubles as the balance floor to keep playing.
    pub min_bet: u32,
    /// Maximum splits per player per round.
    pub max_splits: u32,
    /// Balance each player starts with.
    pub starting_cash: u32,
    /// Multiplier applied to the wager as the natural bonus (1.5 = 3:2).
    pub natural_payout_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_players: 1,
            max_players: 6,
            decks: 6,
            min_bet: 5,
            max_splits: 3,
            starting_cash: 500,
            natural_payout_factor: 1.5,
        }
    }
}

impl TableConfig {
    /// Sets the seat-count bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableConfig;
    ///
    /// let config = TableConfig::default().with_players(2, 4);
    /// assert_eq!(config.min_players, 2);
    /// assert_eq!(config.max_players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, min: u32, max: u32) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Sets the number of decks in the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableConfig;
    ///
    /// let config = TableConfig::default().with_decks(8);
    /// assert_eq!(config.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u32) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the minimum wager.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableConfig;
    ///
    /// let config = TableConfig::default().with_min_bet(25);
    /// assert_eq!(config.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u32) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum number of splits per player per round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableConfig;
    ///
    /// let config = TableConfig::default().with_max_splits(1);
    /// assert_eq!(config.max_splits, 1);
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, max_splits: u32) -> Self {
        self.max_splits = max_splits;
        self
    }

    /// Sets the starting balance per player.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableConfig;
    ///
    /// let config = TableConfig::default().with_starting_cash(1000);
    /// assert_eq!(config.starting_cash, 1000);
    /// ```
    #[must_use]
    pub const fn with_starting_cash(mut self, starting_cash: u32) -> Self {
        self.starting_cash = starting_cash;
        self
    }

    /// Sets the natural bonus multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableConfig;
    ///
    /// let config = TableConfig::default().with_natural_payout_factor(1.2);
    /// assert_eq!(config.natural_payout_factor, 1.2);
    /// ```
    #[must_use]
    pub const fn with_natural_payout_factor(mut self, factor: f64) -> Self {
        self.natural_payout_factor = factor;
        self
    }

    /// Parses a properties-style `key=value` source. Blank lines and lines
    /// starting with `#` are ignored; whitespace around keys and values is
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Fails when a required key is missing or a value does not parse.
    pub fn from_properties(source: &str) -> Result<Self, ConfigError> {
        let mut pairs = HashMap::new();
        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                pairs.insert(key.trim(), value.trim());
            }
        }

        Ok(Self {
            min_players: required(&pairs, "minplayers")?,
            max_players: required(&pairs, "maxplayers")?,
            decks: required(&pairs, "numdecks")?,
            min_bet: required(&pairs, "minbet")?,
            max_splits: required(&pairs, "maxsplits")?,
            starting_cash: required(&pairs, "startingcash")?,
            natural_payout_factor: required(&pairs, "naturalpayoutfactor")?,
        })
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_properties(&source)
    }
}

fn required<T: std::str::FromStr>(
    pairs: &HashMap<&str, &str>,
    key: &'static str,
) -> Result<T, ConfigError> {
    let value = pairs.get(key).copied().ok_or(ConfigError::MissingKey(key))?;
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_owned(),
    })
}
