//! Config parsing and builder tests.

use bjtable::{ConfigError, TableConfig};

const SOURCE: &str = "\
# table rules
minplayers = 1
maxplayers = 4
numdecks = 2
minbet = 10

maxsplits = 2
startingcash = 250
naturalpayoutfactor = 1.5
";

#[test]
fn parses_a_properties_source() {
    let config = TableConfig::from_properties(SOURCE).unwrap();

    assert_eq!(config.min_players, 1);
    assert_eq!(config.max_players, 4);
    assert_eq!(config.decks, 2);
    assert_eq!(config.min_bet, 10);
    assert_eq!(config.max_splits, 2);
    assert_eq!(config.starting_cash, 250);
    assert_eq!(config.natural_payout_factor, 1.5);
}

#[test]
fn missing_key_is_reported() {
    let source = SOURCE.replace("numdecks = 2", "");
    let err = TableConfig::from_properties(&source).unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey("numdecks")));
}

#[test]
fn invalid_value_is_reported() {
    let source = SOURCE.replace("minbet = 10", "minbet = ten");
    let err = TableConfig::from_properties(&source).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key: "minbet", .. }));
}

#[test]
fn builder_sets_fields() {
    let config = TableConfig::default()
        .with_players(2, 4)
        .with_decks(1)
        .with_min_bet(25)
        .with_max_splits(1)
        .with_starting_cash(100)
        .with_natural_payout_factor(1.2);

    assert_eq!(config.min_players, 2);
    assert_eq!(config.max_players, 4);
    assert_eq!(config.decks, 1);
    assert_eq!(config.min_bet, 25);
    assert_eq!(config.max_splits, 1);
    assert_eq!(config.starting_cash, 100);
    assert_eq!(config.natural_payout_factor, 1.2);
}
