use blackjack_engine::cards::{Card, Rank as R, Suit as S};
use blackjack_engine::deck::Deck;
use blackjack_engine::errors::{GameError, Precondition};
use blackjack_engine::player::PlayerAction as A;
use blackjack_engine::round::{Outcome, Round};
use blackjack_engine::rules::{DealerPolicy, PayoutRatio, TableRules};

/// Deck dealing `ranks` in order: player, player, dealer, dealer, then draws.
fn stacked(ranks: &[R]) -> Deck {
    let suits = [S::Clubs, S::Diamonds, S::Hearts, S::Spades];
    Deck::stacked(
        ranks
            .iter()
            .enumerate()
            .map(|(i, &r)| Card::new(r, suits[i % 4]))
            .collect(),
    )
}

fn deal(ranks: &[R]) -> Round {
    Round::deal(stacked(ranks), TableRules::default()).expect("deal")
}

#[test]
fn player_natural_pays_three_to_two() {
    let round = deal(&[R::Ace, R::King, R::Nine, R::Seven]);
    assert!(round.is_terminated());
    assert_eq!(round.outcome(), Outcome::Blackjack);
    assert_eq!(round.reward(), 1.5);
    assert!(round.legal_moves().is_empty());
}

#[test]
fn six_to_five_natural() {
    let rules = TableRules {
        blackjack_payout: PayoutRatio::SIX_TO_FIVE,
        wager: 5.0,
        ..TableRules::default()
    };
    let round = Round::deal(stacked(&[R::Ace, R::King, R::Nine, R::Seven]), rules).unwrap();
    assert_eq!(round.reward(), 6.0);
}

#[test]
fn dealer_natural_wins_immediately() {
    let mut round = deal(&[R::Ten, R::Nine, R::Ace, R::King]);
    assert!(round.is_terminated());
    assert_eq!(round.outcome(), Outcome::DealerWin);
    assert_eq!(round.reward(), -1.0);
    assert_eq!(round.apply(A::Hit), Err(GameError::RoundOver));
}

#[test]
fn both_naturals_push() {
    let round = deal(&[R::Ace, R::King, R::Ace, R::Queen]);
    assert_eq!(round.outcome(), Outcome::Push);
    assert_eq!(round.reward(), 0.0);
}

#[test]
fn bust_loses_even_when_dealer_busts() {
    let mut round = deal(&[R::Ten, R::Six, R::Ten, R::Six, R::King, R::Ten]);
    round.apply(A::Hit).unwrap();
    assert!(round.is_terminated());
    assert!(round.dealer_hand().is_bust(), "dealer still plays out");
    assert_eq!(round.dealer_hand().cards().len(), 3);
    assert_eq!(round.outcome(), Outcome::PlayerBust);
    assert_eq!(round.reward(), -1.0);
}

#[test]
fn double_draws_one_card_and_doubles_wager() {
    let mut round = deal(&[R::Five, R::Six, R::Ten, R::Seven, R::Ten]);
    round.apply(A::Double).unwrap();
    assert!(round.is_terminated());
    let hand = &round.player_hands()[0];
    assert_eq!(hand.cards().len(), 3);
    assert_eq!(hand.total(), 21);
    assert_eq!(hand.wager(), 2.0);
    assert_eq!(round.outcome(), Outcome::PlayerWin);
    assert_eq!(round.reward(), 2.0);
}

#[test]
fn double_on_three_cards_is_rejected_without_changes() {
    let mut round = deal(&[R::Two, R::Three, R::Ten, R::Seven, R::Four]);
    round.apply(A::Hit).unwrap();
    let hands_before = round.player_hands().to_vec();
    let remaining_before = round.deck_remaining();

    let err = round.apply(A::Double).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalAction {
            action: A::Double,
            reason: Precondition::NotTwoCards,
        }
    );
    assert_eq!(round.player_hands(), &hands_before[..]);
    assert_eq!(round.deck_remaining(), remaining_before);
    assert!(!round.is_terminated());
    assert_eq!(round.legal_moves(), vec![A::Stand, A::Hit]);

    round.apply(A::Stand).unwrap();
    assert_eq!(round.outcome(), Outcome::DealerWin);
    assert_eq!(round.reward(), -1.0);
}

#[test]
fn split_eights_plays_two_hands() {
    let mut round = deal(&[R::Eight, R::Eight, R::Ten, R::Seven, R::Three, R::Ten]);
    assert!(round.legal_moves().contains(&A::Split));
    round.apply(A::Split).unwrap();

    let hands = round.player_hands();
    assert_eq!(hands.len(), 2);
    for hand in hands {
        assert_eq!(hand.cards().len(), 1);
        assert_eq!(hand.cards()[0].rank, R::Eight);
        assert_eq!(hand.wager(), 1.0);
    }

    // first hand: 8 + 3, stand
    round.apply(A::Hit).unwrap();
    round.apply(A::Stand).unwrap();
    assert_eq!(round.active_index(), Some(1));
    // second hand: 8 + 10, stand
    round.apply(A::Hit).unwrap();
    round.apply(A::Stand).unwrap();

    assert!(round.is_terminated());
    let results = round.results();
    assert_eq!(results[0].outcome, Outcome::DealerWin);
    assert_eq!(results[1].outcome, Outcome::PlayerWin);
    assert_eq!(round.reward(), 0.0);
    assert_eq!(round.outcome(), Outcome::Push);
    assert_eq!(round.actions().len(), 5);
}

#[test]
fn split_of_unequal_cards_is_rejected() {
    let mut round = deal(&[R::Eight, R::Nine, R::Ten, R::Seven]);
    assert_eq!(
        round.apply(A::Split),
        Err(GameError::IllegalAction {
            action: A::Split,
            reason: Precondition::NotAPair,
        })
    );
    assert_eq!(round.player_hands().len(), 1);
}

#[test]
fn dealer_soft_17_depends_on_policy() {
    let ranks = [R::Ten, R::Eight, R::Ace, R::Six, R::Three];

    let mut h17 = Round::deal(
        stacked(&ranks),
        TableRules {
            dealer_policy: DealerPolicy::HitSoft17,
            ..TableRules::default()
        },
    )
    .unwrap();
    h17.apply(A::Stand).unwrap();
    assert_eq!(h17.dealer_hand().total(), 20);
    assert_eq!(h17.outcome(), Outcome::DealerWin);

    let mut s17 = Round::deal(
        stacked(&ranks),
        TableRules {
            dealer_policy: DealerPolicy::StandAll17,
            ..TableRules::default()
        },
    )
    .unwrap();
    s17.apply(A::Stand).unwrap();
    assert_eq!(s17.dealer_hand().total(), 17);
    assert_eq!(s17.outcome(), Outcome::PlayerWin);
}

#[test]
fn dealer_hits_until_seventeen() {
    let mut round = deal(&[R::Ten, R::Nine, R::Two, R::Three, R::Four, R::Five, R::Three]);
    round.apply(A::Stand).unwrap();
    let dealer = round.dealer_hand();
    assert_eq!(dealer.cards().len(), 5);
    assert_eq!(dealer.value(), (17, false));
    assert_eq!(round.outcome(), Outcome::PlayerWin);
}

#[test]
fn equal_totals_push() {
    let mut round = deal(&[R::Ten, R::Eight, R::Nine, R::Nine]);
    round.apply(A::Stand).unwrap();
    assert_eq!(round.outcome(), Outcome::Push);
    assert_eq!(round.reward(), 0.0);
}

#[test]
fn acting_after_round_over_is_rejected() {
    let mut round = deal(&[R::Ten, R::Eight, R::Nine, R::Nine]);
    round.apply(A::Stand).unwrap();
    assert_eq!(round.apply(A::Hit), Err(GameError::RoundOver));
}

#[test]
fn seeded_rounds_are_reproducible() {
    let rules = TableRules::default();
    for seed in 0..20 {
        let mut a = Round::seeded(rules.clone(), seed).unwrap();
        let mut b = Round::seeded(rules.clone(), seed).unwrap();
        assert_eq!(a.player_hands(), b.player_hands());
        assert_eq!(a.dealer_upcard(), b.dealer_upcard());
        if !a.is_terminated() {
            a.apply(A::Stand).unwrap();
            b.apply(A::Stand).unwrap();
        }
        assert_eq!(a.dealer_hand(), b.dealer_hand());
        assert_eq!(a.outcome(), b.outcome());
        assert_eq!(a.reward(), b.reward());
    }
}

#[test]
fn empty_deck_during_dealer_play_rolls_back_stand() {
    // player 16, dealer 15, nothing left for the dealer to draw
    let mut round = deal(&[R::Ten, R::Six, R::Ten, R::Five]);
    assert_eq!(round.apply(A::Stand), Err(GameError::EmptyDeck));

    assert!(!round.is_terminated());
    assert_eq!(round.outcome(), Outcome::Pending);
    assert_eq!(round.active_index(), Some(0));
    let hand = round.active_hand().expect("hand still in play");
    assert!(!hand.is_stood());
    assert_eq!(hand.total(), 16);
    assert_eq!(round.dealer_hand().cards().len(), 2);
    assert!(round.actions().is_empty());
    assert_eq!(round.deck_remaining(), 0);
    assert!(round.legal_moves().contains(&A::Stand));
}

#[test]
fn empty_deck_after_double_returns_the_drawn_card() {
    // player 5+6, dealer 15; the double draws the last card, the dealer has none
    let mut round = deal(&[R::Five, R::Six, R::Ten, R::Five, R::Three]);
    assert_eq!(round.apply(A::Double), Err(GameError::EmptyDeck));

    let hand = &round.player_hands()[0];
    assert_eq!(hand.cards().len(), 2);
    assert_eq!(hand.wager(), 1.0);
    assert!(!hand.is_stood());
    assert_eq!(round.deck_remaining(), 1);

    round.apply(A::Hit).unwrap();
    let hand = &round.player_hands()[0];
    assert_eq!(hand.cards().last().map(|c| c.rank), Some(R::Three));
    assert_eq!(hand.total(), 14);
    assert!(!round.is_terminated());
}

#[test]
fn active_hand_is_none_once_settled() {
    let mut round = deal(&[R::Ten, R::Eight, R::Nine, R::Nine]);
    assert!(round.active_hand().is_some());
    round.apply(A::Stand).unwrap();
    assert_eq!(round.active_hand(), None);
    assert_eq!(round.current_hand().total(), 18);
}

#[test]
fn outcome_win_and_loss_classes() {
    for outcome in [Outcome::PlayerWin, Outcome::Blackjack, Outcome::DealerBust] {
        assert!(outcome.is_player_win() && !outcome.is_player_loss());
    }
    for outcome in [Outcome::DealerWin, Outcome::PlayerBust] {
        assert!(outcome.is_player_loss() && !outcome.is_player_win());
    }
    assert!(!Outcome::Push.is_player_win() && !Outcome::Push.is_player_loss());
}
