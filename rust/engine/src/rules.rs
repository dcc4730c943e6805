use serde::{Deserialize, Serialize};

use crate::errors::{GameError, Precondition};
use crate::hand::Hand;
use crate::player::PlayerAction as A;

/// How the dealer plays a total of 17.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealerPolicy {
    /// Draw to soft 17, stand on hard 17 and above
    #[default]
    HitSoft17,
    /// Stand on any 17
    StandAll17,
}

impl DealerPolicy {
    pub fn should_hit(self, dealer: &Hand) -> bool {
        if !dealer.is_active() {
            return false;
        }
        let (total, soft) = dealer.value();
        match self {
            DealerPolicy::HitSoft17 => total < 17 || (total == 17 && soft),
            DealerPolicy::StandAll17 => total < 17,
        }
    }
}

/// Natural blackjack payout as a ratio of the wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };

    pub fn multiplier(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl Default for PayoutRatio {
    fn default() -> Self {
        Self::THREE_TO_TWO
    }
}

/// Table configuration shared by every round dealt under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRules {
    /// Standard 52-card decks in the shoe
    pub num_decks: u8,
    pub dealer_policy: DealerPolicy,
    pub blackjack_payout: PayoutRatio,
    /// Most player hands a round may hold after splitting; `None` never caps
    pub max_hands: Option<u8>,
    /// Initial wager on the player's hand
    pub wager: f64,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            num_decks: 1,
            dealer_policy: DealerPolicy::HitSoft17,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
            max_hands: None,
            wager: 1.0,
        }
    }
}

impl TableRules {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_decks == 0 {
            return Err(GameError::InvalidConfig("num_decks must be >= 1".into()));
        }
        if !(self.wager.is_finite() && self.wager > 0.0) {
            return Err(GameError::InvalidConfig("wager must be > 0".into()));
        }
        if self.blackjack_payout.denominator == 0 {
            return Err(GameError::InvalidConfig(
                "blackjack payout denominator cannot be zero".into(),
            ));
        }
        if matches!(self.max_hands, Some(n) if n < 2) {
            return Err(GameError::InvalidConfig("max_hands must be >= 2".into()));
        }
        Ok(())
    }
}

/// Checks whether `action` may be applied to `hands[index]`.
///
/// # Errors
///
/// - [`GameError::HandFinished`] - the hand has stood or busted
/// - [`GameError::IllegalAction`] - a double or split precondition fails; the
///   [`Precondition`] names which one
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::errors::{GameError, Precondition};
/// use blackjack_engine::hand::Hand;
/// use blackjack_engine::player::PlayerAction;
/// use blackjack_engine::rules::{validate_action, TableRules};
///
/// let hand = Hand::with_cards(
///     vec![
///         Card::new(Rank::Eight, Suit::Clubs),
///         Card::new(Rank::Nine, Suit::Hearts),
///     ],
///     1.0,
/// );
/// let rules = TableRules::default();
/// assert!(validate_action(&rules, &[hand.clone()], 0, PlayerAction::Double).is_ok());
/// assert_eq!(
///     validate_action(&rules, &[hand], 0, PlayerAction::Split),
///     Err(GameError::IllegalAction {
///         action: PlayerAction::Split,
///         reason: Precondition::NotAPair,
///     })
/// );
/// ```
pub fn validate_action(
    rules: &TableRules,
    hands: &[Hand],
    index: usize,
    action: A,
) -> Result<(), GameError> {
    let hand = hands
        .get(index)
        .ok_or(GameError::HandFinished { hand: index })?;
    if !hand.is_active() {
        return Err(GameError::HandFinished { hand: index });
    }
    let illegal = |reason| GameError::IllegalAction { action, reason };
    match action {
        A::Stand | A::Hit => Ok(()),
        A::Double => {
            if hand.cards().len() != 2 {
                return Err(illegal(Precondition::NotTwoCards));
            }
            Ok(())
        }
        A::Split => {
            if hand.cards().len() != 2 {
                return Err(illegal(Precondition::NotTwoCards));
            }
            if !hand.can_split() {
                return Err(illegal(Precondition::NotAPair));
            }
            if let Some(max_hands) = rules.max_hands {
                if hands.len() >= max_hands as usize {
                    return Err(illegal(Precondition::SplitLimitReached { max_hands }));
                }
            }
            Ok(())
        }
    }
}
