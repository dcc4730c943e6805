//! # Play Command
//!
//! Interactive blackjack at the terminal. The player types an action per
//! prompt (`stand`, `hit`, `double`, `split` or `s`/`h`/`d`/`p`) and `q` to
//! quit. Rounds are played on the [`Round`] engine directly, so splitting is
//! available here even though the environment does not offer it.

use std::io::{BufRead, Write};

use blackjack_engine::deck::Deck;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::round::Round;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;

/// Handle the play command.
///
/// Plays `rounds` rounds, or until `q`/end of input when `rounds` is `None`.
/// A round abandoned with `q` is not counted.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` if `rounds` is zero, `CliError::Engine`
/// for a non-recoverable engine error and `CliError::Io` on write failures.
/// Unknown or illegal actions are reported on `err` and prompted again.
pub fn handle_play_command(
    rounds: Option<u32>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    let rules = config.table_rules();

    writeln!(
        out,
        "play: rounds={} seed={} decks={} dealer={} wager={}",
        rounds.map_or_else(|| "unlimited".to_string(), |n| n.to_string()),
        seed,
        config.num_decks,
        config.dealer.as_str(),
        config.wager
    )?;

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut played = 0u32;
    let mut net = 0.0;
    let mut quit_requested = false;

    while !quit_requested && rounds.is_none_or(|n| played < n) {
        let deck = Deck::new_with_seed(rules.num_decks, rng.random());
        let mut round = Round::deal(deck, rules.clone())?;
        writeln!(out, "\nRound {}", played + 1)?;

        while !round.is_terminated() {
            ui::write_table(out, &round)?;
            let legal: Vec<&str> = round.legal_moves().iter().map(|a| a.as_str()).collect();
            write!(out, "Action [{}] (q to quit): ", legal.join("/"))?;
            out.flush()?;

            let Some(line) = read_stdin_line(stdin) else {
                quit_requested = true;
                break;
            };
            match line.to_ascii_lowercase().as_str() {
                "" => continue,
                "q" | "quit" => {
                    quit_requested = true;
                    break;
                }
                _ => {}
            }
            let action = match line.parse::<PlayerAction>() {
                Ok(action) => action,
                Err(e) => {
                    ui::write_error(err, &e)?;
                    continue;
                }
            };
            match round.apply(action) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => ui::write_error(err, &e.to_string())?,
                Err(e) => return Err(e.into()),
            }
        }

        if !round.is_terminated() {
            writeln!(out, "\nRound abandoned")?;
            break;
        }
        ui::write_settlement(out, &round)?;
        played += 1;
        net += round.reward();
    }

    writeln!(
        out,
        "\nRounds played: {}, net {}",
        played,
        ui::format_reward(net)
    )?;
    Ok(())
}
