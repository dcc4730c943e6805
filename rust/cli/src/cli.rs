use clap::{Args, Parser, Subcommand};

use crate::config::DealerRule;

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Blackjack rules engine CLI",
    long_about = "Play blackjack at the terminal, evaluate scripted policies and simulate rounds with JSONL history."
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Table flags shared by every command that deals cards. Unset flags fall
/// back to the `BLACKJACK_*` environment and config file.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// RNG seed for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of 52-card decks in the shoe
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    pub decks: Option<u8>,
    /// Dealer rule on soft 17
    #[arg(long, value_enum)]
    pub dealer: Option<DealerRule>,
    /// Wager on each round
    #[arg(long)]
    pub wager: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds interactively against the dealer
    Play {
        /// Number of rounds to play (default: until quit or end of input)
        #[arg(long)]
        rounds: Option<u32>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Evaluate a scripted policy over many episodes
    Eval {
        #[arg(long, default_value = "basic")]
        policy: String,
        #[arg(long, default_value_t = 1000)]
        episodes: u32,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Simulate rounds with a policy and optionally record them as JSONL
    Sim {
        #[arg(long, default_value = "basic")]
        policy: String,
        #[arg(long)]
        rounds: u32,
        #[arg(long)]
        output: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
