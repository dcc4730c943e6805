//! Basic strategy for a game without splits or surrender.
//!
//! Two lookup tables, one for hard totals and one for soft totals, each
//! indexed by the player's total and the dealer's upcard (2-11, Ace as 11).

use blackjack_engine::env::Observation;
use blackjack_engine::player::PlayerAction;

use crate::Policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Play {
    Hit,
    Stand,
    Double,
    /// Double if allowed, otherwise stand
    DoubleOrStand,
}

/// Columns run over dealer upcards 2..=11.
type Row = [Play; 10];

const H: Play = Play::Hit;
const S: Play = Play::Stand;
const D: Play = Play::Double;
const X: Play = Play::DoubleOrStand;

/// Hard totals 4..=21.
const HARD: [Row; 18] = [
    [H, H, H, H, H, H, H, H, H, H], // 4
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H], // 6
    [H, H, H, H, H, H, H, H, H, H], // 7
    [H, H, H, H, H, H, H, H, H, H], // 8
    [H, D, D, D, D, H, H, H, H, H], // 9
    [D, D, D, D, D, D, D, D, H, H], // 10
    [D, D, D, D, D, D, D, D, D, D], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, H, H], // 15
    [S, S, S, S, S, H, H, H, H, H], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17
    [S, S, S, S, S, S, S, S, S, S], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Soft totals 12..=21.
const SOFT: [Row; 10] = [
    [H, H, H, H, H, H, H, H, H, H], // 12
    [H, H, H, D, D, H, H, H, H, H], // 13
    [H, H, H, D, D, H, H, H, H, H], // 14
    [H, H, D, D, D, H, H, H, H, H], // 15
    [H, H, D, D, D, H, H, H, H, H], // 16
    [H, D, D, D, D, H, H, H, H, H], // 17
    [S, X, X, X, X, S, S, H, H, H], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Plays the hard/soft tables. Where the table says double but doubling is
/// not legal (three or more cards), it hits instead, except on soft 18
/// where it stands.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategyPolicy;

impl BasicStrategyPolicy {
    pub fn new() -> Self {
        Self
    }

    fn lookup(observation: &Observation) -> Play {
        let total = usize::from(observation.player_total);
        if total > 21 {
            return Play::Stand;
        }
        let column = usize::from(observation.dealer_upcard.clamp(2, 11)) - 2;
        if observation.usable_ace {
            SOFT[total.max(12) - 12][column]
        } else {
            HARD[total.max(4) - 4][column]
        }
    }
}

impl Policy for BasicStrategyPolicy {
    fn decide(&mut self, observation: &Observation, legal_moves: &[PlayerAction]) -> PlayerAction {
        match Self::lookup(observation) {
            Play::Stand => PlayerAction::Stand,
            Play::Hit => PlayerAction::Hit,
            Play::Double if legal_moves.contains(&PlayerAction::Double) => PlayerAction::Double,
            Play::Double => PlayerAction::Hit,
            Play::DoubleOrStand if legal_moves.contains(&PlayerAction::Double) => {
                PlayerAction::Double
            }
            Play::DoubleOrStand => PlayerAction::Stand,
        }
    }

    fn name(&self) -> &str {
        "basic"
    }
}
