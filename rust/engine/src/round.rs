use std::fmt;

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::logger::ActionRecord;
use crate::player::PlayerAction;
use crate::rules::{validate_action, TableRules};

/// Result of a round, or of one player hand within it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Still being played
    Pending,
    /// Player total beat the dealer's
    PlayerWin,
    /// Dealer total beat the player's, or the dealer was dealt a natural
    DealerWin,
    /// Equal totals, or both sides dealt a natural
    Push,
    /// Player dealt a natural, dealer not
    Blackjack,
    /// Player went over 21
    PlayerBust,
    /// Dealer went over 21 while the player hand stood
    DealerBust,
}

impl Outcome {
    pub fn is_player_win(self) -> bool {
        matches!(
            self,
            Outcome::PlayerWin | Outcome::Blackjack | Outcome::DealerBust
        )
    }

    pub fn is_player_loss(self) -> bool {
        matches!(self, Outcome::DealerWin | Outcome::PlayerBust)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Pending => "pending",
            Outcome::PlayerWin => "player wins",
            Outcome::DealerWin => "dealer wins",
            Outcome::Push => "push",
            Outcome::Blackjack => "blackjack",
            Outcome::PlayerBust => "player bust",
            Outcome::DealerBust => "dealer bust",
        };
        f.write_str(s)
    }
}

/// Settlement of a single player hand. `reward` is the net profit on the
/// hand's final wager: `-wager` for a loss, `0` for a push, `+wager` for a win
/// and `+wager * payout` for a natural.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub outcome: Outcome,
    pub wager: f64,
    pub reward: f64,
}

/// One round of blackjack: the deck it is dealt from, the player's hands, the
/// dealer's hand and the settlement once everything is finished.
///
/// Player hands are played in order. Actions always apply to the first hand
/// that has neither stood nor busted; once none is left the dealer draws
/// under the table's [`DealerPolicy`](crate::rules::DealerPolicy) and every
/// hand is settled.
///
/// ```
/// use blackjack_engine::cards::{Card, Rank::*, Suit::*};
/// use blackjack_engine::deck::Deck;
/// use blackjack_engine::player::PlayerAction;
/// use blackjack_engine::round::{Outcome, Round};
/// use blackjack_engine::rules::TableRules;
///
/// // player 10 7, dealer 10 8
/// let deck = Deck::stacked(vec![
///     Card::new(Ten, Clubs),
///     Card::new(Seven, Clubs),
///     Card::new(Ten, Hearts),
///     Card::new(Eight, Hearts),
/// ]);
/// let mut round = Round::deal(deck, TableRules::default()).unwrap();
/// round.apply(PlayerAction::Stand).unwrap();
/// assert!(round.is_terminated());
/// assert_eq!(round.outcome(), Outcome::DealerWin);
/// assert_eq!(round.reward(), -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Round<R = ChaCha20Rng> {
    deck: Deck<R>,
    rules: TableRules,
    player_hands: Vec<Hand>,
    dealer_hand: Hand,
    /// The dealer's face-up card, the first one dealt to the dealer
    upcard: Card,
    /// Index of the hand the next action applies to
    active: usize,
    actions: Vec<ActionRecord>,
    results: Vec<HandResult>,
    outcome: Outcome,
}

impl Round<ChaCha20Rng> {
    pub fn seeded(rules: TableRules, seed: u64) -> Result<Self, GameError> {
        let deck = Deck::new_with_seed(rules.num_decks, seed);
        Self::deal(deck, rules)
    }
}

impl<R: Rng> Round<R> {
    /// Deals two cards to the player, then two to the dealer, and settles at
    /// once if either side holds a natural.
    pub fn deal(mut deck: Deck<R>, rules: TableRules) -> Result<Self, GameError> {
        rules.validate()?;
        let mut player = Hand::new(rules.wager);
        player.push(deck.draw()?);
        player.push(deck.draw()?);
        let mut dealer = Hand::new(0.0);
        dealer.push(deck.draw()?);
        dealer.push(deck.draw()?);
        let upcard = dealer.cards()[0];

        let mut round = Self {
            deck,
            rules,
            player_hands: vec![player],
            dealer_hand: dealer,
            upcard,
            active: 0,
            actions: Vec::new(),
            results: Vec::new(),
            outcome: Outcome::Pending,
        };
        if round.player_hands[0].is_blackjack() || round.dealer_hand.is_blackjack() {
            round.settle_naturals();
        }
        Ok(round)
    }

    /// Applies `action` to the active hand.
    ///
    /// A rejected action leaves the hands, wagers and deck untouched. That
    /// includes a deck running out while the dealer draws: the cards drawn
    /// during the call go back to the deck and the round stays where it was.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundOver`] - the round has already been settled
    /// - [`GameError::IllegalAction`] - a double or split precondition fails
    /// - [`GameError::EmptyDeck`] - no card left to draw
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), GameError> {
        if self.is_terminated() {
            return Err(GameError::RoundOver);
        }
        let index = self.active;
        validate_action(&self.rules, &self.player_hands, index, action)?;

        let hands_before = self.player_hands.clone();
        let dealer_before = self.dealer_hand.clone();
        let actions_before = self.actions.len();
        let mut drawn = Vec::new();
        if let Err(e) = self.resolve(index, action, &mut drawn) {
            // last drawn goes back first so a stacked deck deals in its old order
            for card in drawn.into_iter().rev() {
                self.deck.put_back(card);
            }
            self.player_hands = hands_before;
            self.dealer_hand = dealer_before;
            self.active = index;
            self.actions.truncate(actions_before);
            debug!(hand = index, %action, error = %e, "action rolled back");
            return Err(e);
        }
        Ok(())
    }

    fn resolve(
        &mut self,
        index: usize,
        action: PlayerAction,
        drawn: &mut Vec<Card>,
    ) -> Result<(), GameError> {
        match action {
            PlayerAction::Stand => self.player_hands[index].stand(),
            PlayerAction::Hit => {
                let card = self.draw(drawn)?;
                self.player_hands[index].push(card);
            }
            PlayerAction::Double => {
                let card = self.draw(drawn)?;
                let hand = &mut self.player_hands[index];
                hand.push(card);
                hand.double_wager();
                hand.stand();
            }
            PlayerAction::Split => {
                let new_hand = self.player_hands[index].split_off();
                self.player_hands.push(new_hand);
            }
        }
        debug!(
            hand = index,
            %action,
            total = self.player_hands[index].total(),
            "applied player action"
        );
        self.actions.push(ActionRecord {
            hand: index,
            action,
        });
        self.advance(drawn)
    }

    fn draw(&mut self, drawn: &mut Vec<Card>) -> Result<Card, GameError> {
        let card = self.deck.draw()?;
        drawn.push(card);
        Ok(card)
    }

    /// Actions [`apply`](Round::apply) would accept right now.
    pub fn legal_moves(&self) -> Vec<PlayerAction> {
        if self.is_terminated() {
            return Vec::new();
        }
        [
            PlayerAction::Stand,
            PlayerAction::Hit,
            PlayerAction::Double,
            PlayerAction::Split,
        ]
        .into_iter()
        .filter(|&a| validate_action(&self.rules, &self.player_hands, self.active, a).is_ok())
        .collect()
    }

    fn advance(&mut self, drawn: &mut Vec<Card>) -> Result<(), GameError> {
        while self.active < self.player_hands.len() && !self.player_hands[self.active].is_active()
        {
            self.active += 1;
        }
        if self.active == self.player_hands.len() {
            self.play_dealer(drawn)?;
            self.settle();
        }
        Ok(())
    }

    fn play_dealer(&mut self, drawn: &mut Vec<Card>) -> Result<(), GameError> {
        while self.rules.dealer_policy.should_hit(&self.dealer_hand) {
            let card = self.draw(drawn)?;
            trace!(%card, "dealer draws");
            self.dealer_hand.push(card);
        }
        if self.dealer_hand.is_active() {
            self.dealer_hand.stand();
        }
        debug!(total = self.dealer_hand.total(), "dealer finished");
        Ok(())
    }

    fn settle_naturals(&mut self) {
        let player_natural = self.player_hands[0].is_blackjack();
        let dealer_natural = self.dealer_hand.is_blackjack();
        let wager = self.player_hands[0].wager();
        let (outcome, reward) = match (player_natural, dealer_natural) {
            (true, true) => (Outcome::Push, 0.0),
            (true, false) => (
                Outcome::Blackjack,
                wager * self.rules.blackjack_payout.multiplier(),
            ),
            _ => (Outcome::DealerWin, -wager),
        };
        self.player_hands[0].stand();
        if self.dealer_hand.is_active() {
            self.dealer_hand.stand();
        }
        self.active = self.player_hands.len();
        self.results = vec![HandResult {
            outcome,
            wager,
            reward,
        }];
        self.outcome = outcome;
        debug!(?outcome, reward, "natural dealt");
    }

    fn settle(&mut self) {
        let dealer_total = self.dealer_hand.total();
        let dealer_bust = self.dealer_hand.is_bust();
        self.results = self
            .player_hands
            .iter()
            .map(|hand| {
                let wager = hand.wager();
                let total = hand.total();
                let (outcome, reward) = if hand.is_bust() {
                    (Outcome::PlayerBust, -wager)
                } else if dealer_bust {
                    (Outcome::DealerBust, wager)
                } else if total > dealer_total {
                    (Outcome::PlayerWin, wager)
                } else if total == dealer_total {
                    (Outcome::Push, 0.0)
                } else {
                    (Outcome::DealerWin, -wager)
                };
                HandResult {
                    outcome,
                    wager,
                    reward,
                }
            })
            .collect();

        self.outcome = match self.results.as_slice() {
            [single] => single.outcome,
            _ => {
                let net = self.reward();
                if net > 0.0 {
                    Outcome::PlayerWin
                } else if net < 0.0 {
                    Outcome::DealerWin
                } else {
                    Outcome::Push
                }
            }
        };
        debug!(outcome = ?self.outcome, reward = self.reward(), "round settled");
    }

    pub fn is_terminated(&self) -> bool {
        self.outcome != Outcome::Pending
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Net profit over all player hands; `0.0` while the round is pending.
    pub fn reward(&self) -> f64 {
        self.results.iter().map(|r| r.reward).sum()
    }

    pub fn results(&self) -> &[HandResult] {
        &self.results
    }

    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn dealer_upcard(&self) -> Card {
        self.upcard
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.is_terminated()).then_some(self.active)
    }

    pub fn active_hand(&self) -> Option<&Hand> {
        self.active_index().and_then(|i| self.player_hands.get(i))
    }

    /// The active hand, or the last player hand once the round is over.
    pub fn current_hand(&self) -> &Hand {
        let last = self.player_hands.len() - 1;
        &self.player_hands[self.active.min(last)]
    }

    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
