//! # Eval Command
//!
//! Runs a scripted policy through the environment for a number of episodes
//! and reports its win/loss/push split and average reward.

use std::io::Write;

use blackjack_ai::{create_policy, play_episode};
use blackjack_engine::env::BlackjackEnv;
use tracing::info;

use crate::config::Config;
use crate::error::CliError;
use crate::ui;

pub fn handle_eval_command(
    policy_name: &str,
    episodes: u32,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if episodes == 0 {
        return Err(CliError::InvalidInput("episodes must be >= 1".to_string()));
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut policy = create_policy(policy_name, Some(seed))?;
    let mut env = BlackjackEnv::new(config.table_rules(), Some(seed))?;

    let (mut wins, mut losses, mut pushes) = (0u32, 0u32, 0u32);
    let mut total_reward = 0.0;
    let mut total_steps = 0usize;
    for _ in 0..episodes {
        let episode = play_episode(&mut env, policy.as_mut())?;
        if episode.outcome.is_player_win() {
            wins += 1;
        } else if episode.outcome.is_player_loss() {
            losses += 1;
        } else {
            pushes += 1;
        }
        total_reward += episode.reward;
        total_steps += episode.steps;
    }
    let average = total_reward / f64::from(episodes);
    info!(policy = policy.name(), episodes, average, "evaluation finished");

    writeln!(
        out,
        "eval: policy={} episodes={} seed={}",
        policy.name(),
        episodes,
        seed
    )?;
    writeln!(out, "Wins: {} ({:.1}%)", wins, ui::percent(wins, episodes))?;
    writeln!(out, "Losses: {} ({:.1}%)", losses, ui::percent(losses, episodes))?;
    writeln!(out, "Pushes: {} ({:.1}%)", pushes, ui::percent(pushes, episodes))?;
    writeln!(out, "Total reward: {}", ui::format_reward(total_reward))?;
    writeln!(out, "Average reward: {:.4}", average)?;
    writeln!(
        out,
        "Average steps: {:.2}",
        total_steps as f64 / f64::from(episodes)
    )?;
    Ok(())
}
