//! Interactive terminal front end for the blackjack table engine.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

use bjtable::{Card, ConfigError, Dealer, Hand, Player, Suit, Table, TableConfig, TableIo};

const INVALID_ANSWER: &str = "Invalid answer, please try again.";
const RULE: &str = "***************************************";

/// Multi-player terminal blackjack.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a key=value config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed; defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut table = Table::new(config, seed);
    table.run(&mut Console);
    Ok(())
}

/// [`TableIo`] over dialoguer prompts and plain stdout.
struct Console;

impl TableIo for Console {
    fn ask_integer(&mut self, prompt: &str, min: u32, max: u32) -> u32 {
        loop {
            let input: String = Input::new()
                .with_prompt(format!("{prompt} [{min} to {max}]"))
                .interact_text()
                .unwrap_or_default();

            match input.trim().parse::<u32>() {
                Ok(value) if (min..=max).contains(&value) => return value,
                _ => println!("{INVALID_ANSWER}"),
            }
        }
    }

    fn ask_choice(&mut self, prompt: &str, first: char, second: char) -> char {
        loop {
            let input: String = Input::new()
                .with_prompt(format!("{prompt} [{first}, {second}]"))
                .interact_text()
                .unwrap_or_default();

            let answer = input.trim().chars().next().map(|c| c.to_ascii_lowercase());
            if answer == Some(first.to_ascii_lowercase()) {
                return first;
            }
            if answer == Some(second.to_ascii_lowercase()) {
                return second;
            }
            println!("{INVALID_ANSWER}");
        }
    }

    fn display(&mut self, text: &str) {
        println!("{text}");
    }

    fn display_and_wait(&mut self, text: &str) {
        println!("{text}");
        print!("Press Enter to continue...");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().read_line(&mut line);
    }

    fn refresh(&mut self, dealer: &Dealer, players: &[Player]) {
        println!("\n{RULE}");
        println!("{}", "              Blackjack              ".bold());
        println!("{RULE}");

        println!("Dealer\n\t{}", render_hand(dealer.hand(), None));

        for player in players {
            println!("Player {}", player.number());
            println!("\tCash balance: ${}", player.cash());
            for hand in player.hands() {
                println!("\t{}", render_hand(hand.hand(), Some(hand.wager())));
            }
        }

        println!("{RULE}");
    }
}

fn render_hand(hand: &Hand, wager: Option<u32>) -> String {
    if hand.is_empty() {
        return "no cards".to_string();
    }

    let mut line = hand
        .cards()
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join(" ");

    if hand.cards().iter().all(|card| card.face_up) {
        line.push_str(&format!("  value {}", hand.value()));
    }
    if let Some(wager) = wager {
        line.push_str(&format!("  wager ${wager}"));
    }

    line
}

fn render_card(card: &Card) -> String {
    if !card.face_up {
        return "???".dimmed().to_string();
    }

    let text = card.to_string();
    match card.suit {
        Suit::Hearts | Suit::Diamonds => text.red().to_string(),
        Suit::Clubs => text.green().to_string(),
        Suit::Spades => text.blue().to_string(),
    }
}
