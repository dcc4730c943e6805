//! # Blackjack CLI Library
//!
//! Command-line front end for the blackjack engine: interactive play,
//! policy evaluation, simulation with JSONL round history and configuration
//! display.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["blackjack", "eval", "--policy", "basic", "--episodes", "100"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds interactively against the dealer
//! - `eval`: Evaluate a scripted policy over many episodes
//! - `sim`: Simulate rounds and optionally write a JSONL history
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{BlackjackCli, Commands, TableArgs};
use commands::handle_cfg_command;
pub use commands::{handle_eval_command, handle_play_command, handle_sim_command};
use config::Config;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "eval", "sim", "cfg"];

/// Parses `args` and runs the selected subcommand.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or
/// [`exit_code::ERROR`]. Help and version output go to `out` with success;
/// parse errors and command failures are reported on `err`.
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = blackjack_cli::run(
///     ["blackjack", "sim", "--rounds", "5", "--seed", "42"],
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Simulated: 5 rounds"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    match BlackjackCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string());
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match dispatch(cli.cmd, out, err) {
            Ok(()) => exit_code::SUCCESS,
            Err(e) => {
                let _ = ui::write_error(err, &e.to_string());
                exit_code::ERROR
            }
        },
    }
}

fn write_usage(err: &mut dyn Write, parse_error: &str) -> std::io::Result<()> {
    writeln!(err, "{}", parse_error)?;
    writeln!(err)?;
    writeln!(err, "Blackjack CLI")?;
    writeln!(err, "Usage: blackjack <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: blackjack --help")
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play { rounds, table } => {
            let config = table_config(&table)?;
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(rounds, &config, out, err, &mut stdin_lock)
        }
        Commands::Eval {
            policy,
            episodes,
            table,
        } => handle_eval_command(&policy, episodes, &table_config(&table)?, out),
        Commands::Sim {
            policy,
            rounds,
            output,
            table,
        } => handle_sim_command(
            &policy,
            rounds,
            output.as_deref(),
            &table_config(&table)?,
            out,
        ),
    }
}

/// Resolves file and env configuration, then applies the command's flags.
pub fn table_config(table: &TableArgs) -> Result<Config, CliError> {
    let resolved = config::load_with_sources()?.with_overrides(
        table.seed,
        table.decks,
        table.dealer,
        table.wager,
    )?;
    Ok(resolved.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_commands_parse() {
        let commands = vec![
            vec!["blackjack", "cfg"],
            vec!["blackjack", "play", "--rounds", "1"],
            vec!["blackjack", "eval", "--policy", "random", "--episodes", "1"],
            vec!["blackjack", "sim", "--rounds", "1", "--output", "x.jsonl"],
            vec![
                "blackjack", "eval", "--decks", "6", "--dealer", "s17", "--wager", "2",
            ],
        ];
        for cmd_args in commands {
            let result = BlackjackCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_zero_decks_rejected_by_parser() {
        let result = BlackjackCli::try_parse_from(["blackjack", "eval", "--decks", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sim_requires_rounds() {
        assert!(BlackjackCli::try_parse_from(["blackjack", "sim"]).is_err());
    }
}
