use thiserror::Error;

use crate::cards::Card;
use crate::player::PlayerAction;

/// The rule an action request failed to satisfy.
#[derive(Debug, Copy, Clone, Error, PartialEq, Eq)]
pub enum Precondition {
    #[error("hand must hold exactly two cards")]
    NotTwoCards,
    #[error("cards must have equal value to split")]
    NotAPair,
    #[error("split limit of {max_hands} hands reached")]
    SplitLimitReached { max_hands: u8 },
    #[error("action is not among the legal moves")]
    NotOffered,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Card {0} not found in deck")]
    CardNotFound(Card),
    #[error("Illegal action {action}: {reason}")]
    IllegalAction {
        action: PlayerAction,
        reason: Precondition,
    },
    #[error("Hand {hand} is already finished")]
    HandFinished { hand: usize },
    #[error("Round is already over")]
    RoundOver,
    #[error("No round in progress")]
    NoRoundInProgress,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// True for rejections that leave the round intact and can be retried
    /// with a different action.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::IllegalAction { .. } | GameError::HandFinished { .. } | GameError::RoundOver
        )
    }
}
