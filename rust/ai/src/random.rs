//! Uniformly random play, the usual floor for comparing policies.

use blackjack_engine::env::Observation;
use blackjack_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::Policy;

#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn decide(&mut self, _observation: &Observation, legal_moves: &[PlayerAction]) -> PlayerAction {
        if legal_moves.is_empty() {
            return PlayerAction::Stand;
        }
        legal_moves[self.rng.random_range(0..legal_moves.len())]
    }

    fn name(&self) -> &str {
        "random"
    }
}
