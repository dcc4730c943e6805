//! Never draws a card that could bust the hand.

use blackjack_engine::env::Observation;
use blackjack_engine::player::PlayerAction;

use crate::Policy;

/// Doubles on 11 when allowed, stands on 12 or more and hits below that.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverBustPolicy;

impl Policy for NeverBustPolicy {
    fn decide(&mut self, observation: &Observation, legal_moves: &[PlayerAction]) -> PlayerAction {
        let total = observation.player_total;
        if total == 11 && legal_moves.contains(&PlayerAction::Double) {
            PlayerAction::Double
        } else if total >= 12 {
            PlayerAction::Stand
        } else {
            PlayerAction::Hit
        }
    }

    fn name(&self) -> &str {
        "never_bust"
    }
}
