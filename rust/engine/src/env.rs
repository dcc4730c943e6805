//! Step/reset environment over a [`Round`], in the style of a gym environment.
//!
//! Contract:
//!
//! - [`BlackjackEnv::reset`] deals a fresh round from a fresh deck and returns
//!   the first observation. A natural on the deal ends the round immediately;
//!   check [`BlackjackEnv::is_terminated`] and [`BlackjackEnv::reward`].
//! - [`BlackjackEnv::step`] accepts only actions from
//!   [`BlackjackEnv::legal_moves`] (stand, hit, and double on two cards).
//!   Anything else is rejected with [`GameError::IllegalAction`]: the round is
//!   left untouched and no penalty reward is given.
//! - Stepping a finished round fails with [`GameError::RoundOver`].
//! - Rewards are net profit on the wager and are only non-zero on the step
//!   that ends the round.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::errors::{GameError, Precondition};
use crate::player::PlayerAction;
use crate::round::Round;
use crate::rules::TableRules;

/// What a policy sees: the current hand's total, the dealer's upcard value
/// (2-11, Ace as 11) and whether the hand is soft.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub player_total: u8,
    pub dealer_upcard: u8,
    pub usable_ace: bool,
}

impl Observation {
    pub fn from_round<R: Rng>(round: &Round<R>) -> Self {
        let (player_total, usable_ace) = round.current_hand().value();
        Self {
            player_total,
            dealer_upcard: round.dealer_upcard().value(),
            usable_ace,
        }
    }

    /// `[player_total, dealer_upcard, usable_ace]` with the flag as 0 or 1.
    pub fn as_array(&self) -> [u8; 3] {
        [
            self.player_total,
            self.dealer_upcard,
            u8::from(self.usable_ace),
        ]
    }
}

/// Free-form step metadata.
pub type Info = Map<String, Value>;

/// Everything [`BlackjackEnv::step`] reports back.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub terminated: bool,
    pub info: Info,
}

#[derive(Debug)]
pub struct BlackjackEnv {
    rules: TableRules,
    /// Seeds the deck of every round
    rng: ChaCha20Rng,
    round: Option<Round>,
    round_seed: Option<u64>,
    legal_moves: Vec<PlayerAction>,
    reward: f64,
    terminated: bool,
}

impl BlackjackEnv {
    /// Builds an environment; no round is dealt until [`reset`](Self::reset).
    /// Without a seed the deck seeds are drawn from the thread RNG.
    pub fn new(rules: TableRules, seed: Option<u64>) -> Result<Self, GameError> {
        rules.validate()?;
        let seed = seed.unwrap_or_else(rand::random);
        Ok(Self {
            rules,
            rng: ChaCha20Rng::seed_from_u64(seed),
            round: None,
            round_seed: None,
            legal_moves: Vec::new(),
            reward: 0.0,
            terminated: false,
        })
    }

    pub fn reset(&mut self) -> Result<Observation, GameError> {
        let seed: u64 = self.rng.random();
        let deck = Deck::new_with_seed(self.rules.num_decks, seed);
        self.start(deck, Some(seed))
    }

    /// Reseeds the environment, then resets.
    pub fn reset_with_seed(&mut self, seed: u64) -> Result<Observation, GameError> {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        self.reset()
    }

    /// Resets onto a caller-supplied deck, e.g. a stacked one.
    pub fn reset_with_deck(&mut self, deck: Deck) -> Result<Observation, GameError> {
        self.start(deck, None)
    }

    fn start(&mut self, deck: Deck, seed: Option<u64>) -> Result<Observation, GameError> {
        let round = Round::deal(deck, self.rules.clone())?;
        info!(
            player = %round.current_hand(),
            upcard = %round.dealer_upcard(),
            seed,
            "starting new round"
        );
        self.round_seed = seed;
        self.round = Some(round);
        self.refresh();
        if self.terminated {
            info!(reward = self.reward, "round ended on the deal");
        }
        self.observe()
    }

    pub fn step(&mut self, action: PlayerAction) -> Result<Step, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoRoundInProgress)?;
        if round.is_terminated() {
            return Err(GameError::RoundOver);
        }
        let applied = if PlayerAction::ENV_ACTIONS.contains(&action) {
            round.apply(action)
        } else {
            Err(GameError::IllegalAction {
                action,
                reason: Precondition::NotOffered,
            })
        };
        if let Err(e) = applied {
            if e.is_recoverable() {
                warn!(%action, legal = ?self.legal_moves, "{e}");
            }
            return Err(e);
        }

        debug!(%action, hand = %round.current_hand(), "player step");
        self.refresh();
        let observation = self.observe()?;
        let mut info = Info::new();
        info.insert("legal_moves".into(), json!(self.legal_moves));
        if self.terminated {
            if let Some(round) = &self.round {
                info!(
                    player = round.current_hand().total(),
                    dealer = round.dealer_hand().total(),
                    reward = self.reward,
                    "round over"
                );
                info.insert("outcome".into(), json!(round.outcome()));
                info.insert("dealer_total".into(), json!(round.dealer_hand().total()));
                info.insert("wager".into(), json!(round.current_hand().wager()));
            }
        }
        Ok(Step {
            observation,
            reward: self.reward,
            terminated: self.terminated,
            info,
        })
    }

    fn refresh(&mut self) {
        let Some(round) = &self.round else {
            return;
        };
        self.terminated = round.is_terminated();
        self.reward = if self.terminated { round.reward() } else { 0.0 };
        self.legal_moves = round
            .legal_moves()
            .into_iter()
            .filter(|a| PlayerAction::ENV_ACTIONS.contains(a))
            .collect();
    }

    /// Observation of the current round, computed from the hands each call.
    pub fn observe(&self) -> Result<Observation, GameError> {
        self.round
            .as_ref()
            .map(Observation::from_round)
            .ok_or(GameError::NoRoundInProgress)
    }

    pub fn legal_moves(&self) -> &[PlayerAction] {
        &self.legal_moves
    }

    pub fn reward(&self) -> f64 {
        self.reward
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Seed of the current round's deck; `None` for caller-supplied decks.
    pub fn round_seed(&self) -> Option<u64> {
        self.round_seed
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<BlackjackEnv>();
    }

    #[test]
    fn observation_array_encodes_flag() {
        let obs = Observation {
            player_total: 17,
            dealer_upcard: 11,
            usable_ace: true,
        };
        assert_eq!(obs.as_array(), [17, 11, 1]);
    }
}
