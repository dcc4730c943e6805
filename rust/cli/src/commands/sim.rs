//! # Sim Command
//!
//! Plays rounds with a scripted policy and, given `--output`, writes one
//! `RoundRecord` per round to a JSONL file.

use std::io::Write;

use blackjack_ai::{create_policy, play_episode};
use blackjack_engine::env::BlackjackEnv;
use blackjack_engine::errors::GameError;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::CliError;
use crate::ui;

pub fn handle_sim_command(
    policy_name: &str,
    rounds: u32,
    output: Option<&str>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut policy = create_policy(policy_name, Some(seed))?;
    let mut env = BlackjackEnv::new(config.table_rules(), Some(seed))?;
    let mut logger = output.map(RoundLogger::create).transpose()?;

    let mut net = 0.0;
    let mut wins = 0u32;
    for i in 0..rounds {
        let episode = play_episode(&mut env, policy.as_mut())?;
        net += episode.reward;
        if episode.outcome.is_player_win() {
            wins += 1;
        }
        if let Some(logger) = logger.as_mut() {
            let round = env.round().ok_or(GameError::NoRoundInProgress)?;
            let mut record = RoundRecord::from_round(logger.next_id(), env.round_seed(), round);
            record.policy = Some(policy.name().to_string());
            logger.write(&record)?;
        }
        debug!(round = i + 1, reward = episode.reward, "simulated round");
    }
    info!(rounds, net, "simulation finished");

    writeln!(
        out,
        "sim: policy={} rounds={} seed={}",
        policy.name(),
        rounds,
        seed
    )?;
    writeln!(out, "Simulated: {} rounds", rounds)?;
    writeln!(out, "Wins: {} ({:.1}%)", wins, ui::percent(wins, rounds))?;
    writeln!(out, "Net reward: {}", ui::format_reward(net))?;
    if let Some(path) = output {
        writeln!(out, "Output: {}", path)?;
    }
    Ok(())
}
