use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A move the player (or the dealer policy) can make on a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    /// Take no more cards on this hand
    Stand,
    /// Draw one card
    Hit,
    /// Double the wager, draw exactly one card, then stand
    Double,
    /// Turn a pair into two hands
    Split,
}

impl PlayerAction {
    /// Actions in the environment's discrete action-space order.
    pub const ENV_ACTIONS: [PlayerAction; 3] =
        [PlayerAction::Stand, PlayerAction::Hit, PlayerAction::Double];

    /// Maps a discrete action index (0 = stand, 1 = hit, 2 = double) to an action.
    pub fn from_index(index: usize) -> Option<PlayerAction> {
        Self::ENV_ACTIONS.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerAction::Stand => "stand",
            PlayerAction::Hit => "hit",
            PlayerAction::Double => "double",
            PlayerAction::Split => "split",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "stand" | "stay" => Ok(PlayerAction::Stand),
            "h" | "hit" => Ok(PlayerAction::Hit),
            "d" | "double" => Ok(PlayerAction::Double),
            "p" | "split" => Ok(PlayerAction::Split),
            other => Err(format!("unknown action: {other}")),
        }
    }
}
