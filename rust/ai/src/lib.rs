//! # blackjack-ai: Scripted Policies for the Blackjack Environment
//!
//! Decision policies that play rounds through
//! [`BlackjackEnv`](blackjack_engine::env::BlackjackEnv), for baselines and
//! evaluation.
//!
//! ## Core Components
//!
//! - [`Policy`] - Trait every policy implements
//! - [`random`] - Uniform choice over the legal moves
//! - [`never_bust`] - Never draws on 12 or more
//! - [`basic_strategy`] - Table-driven basic strategy
//! - [`create_policy`] - Factory function for creating policies by name
//! - [`play_episode`] - Plays one round with a policy
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_ai::{create_policy, play_episode};
//! use blackjack_engine::env::BlackjackEnv;
//! use blackjack_engine::rules::TableRules;
//!
//! let mut env = BlackjackEnv::new(TableRules::default(), Some(42)).unwrap();
//! let mut policy = create_policy("basic", Some(42)).unwrap();
//! let episode = play_episode(&mut env, policy.as_mut()).unwrap();
//! println!("{} earned {}", policy.name(), episode.reward);
//! ```

use blackjack_engine::env::{BlackjackEnv, Observation};
use blackjack_engine::errors::GameError;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::round::Outcome;
use thiserror::Error;
use tracing::debug;

pub mod basic_strategy;
pub mod never_bust;
pub mod random;

/// Names accepted by [`create_policy`].
pub const POLICY_NAMES: [&str; 3] = ["random", "never_bust", "basic"];

/// A decision rule mapping an observation to one of the legal moves.
///
/// # Example Implementation
///
/// ```rust
/// use blackjack_ai::Policy;
/// use blackjack_engine::env::Observation;
/// use blackjack_engine::player::PlayerAction;
///
/// struct AlwaysStand;
///
/// impl Policy for AlwaysStand {
///     fn decide(&mut self, _obs: &Observation, _legal: &[PlayerAction]) -> PlayerAction {
///         PlayerAction::Stand
///     }
///
///     fn name(&self) -> &str {
///         "always_stand"
///     }
/// }
/// ```
pub trait Policy: Send {
    /// Picks the next action. Implementations should return a member of
    /// `legal_moves` whenever it is non-empty.
    fn decide(&mut self, observation: &Observation, legal_moves: &[PlayerAction]) -> PlayerAction;

    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown policy: {name} (expected one of: {expected})", expected = POLICY_NAMES.join(", "))]
    Unknown { name: String },
}

/// Builds a policy by name. `seed` only matters to policies that randomize.
///
/// ```rust
/// use blackjack_ai::create_policy;
///
/// let policy = create_policy("never_bust", None).unwrap();
/// assert_eq!(policy.name(), "never_bust");
/// assert!(create_policy("psychic", None).is_err());
/// ```
pub fn create_policy(name: &str, seed: Option<u64>) -> Result<Box<dyn Policy>, PolicyError> {
    match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "random" => Ok(Box::new(random::RandomPolicy::new(seed))),
        "never_bust" => Ok(Box::new(never_bust::NeverBustPolicy)),
        "basic" | "basic_strategy" => Ok(Box::new(basic_strategy::BasicStrategyPolicy::new())),
        _ => Err(PolicyError::Unknown {
            name: name.to_string(),
        }),
    }
}

/// What happened in one round played by a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub reward: f64,
    pub steps: usize,
    pub actions: Vec<PlayerAction>,
    pub outcome: Outcome,
}

/// Resets `env` and lets `policy` act until the round is over.
///
/// # Errors
///
/// Propagates any [`GameError`] from the environment, including an
/// [`IllegalAction`](GameError::IllegalAction) if the policy picks a move that
/// is not legal.
pub fn play_episode(env: &mut BlackjackEnv, policy: &mut dyn Policy) -> Result<Episode, GameError> {
    let mut observation = env.reset()?;
    let mut actions = Vec::new();
    while !env.is_terminated() {
        let action = policy.decide(&observation, env.legal_moves());
        observation = env.step(action)?.observation;
        actions.push(action);
    }
    let outcome = env
        .round()
        .map(|r| r.outcome())
        .ok_or(GameError::NoRoundInProgress)?;
    debug!(policy = policy.name(), steps = actions.len(), reward = env.reward(), "episode finished");
    Ok(Episode {
        reward: env.reward(),
        steps: actions.len(),
        actions,
        outcome,
    })
}
