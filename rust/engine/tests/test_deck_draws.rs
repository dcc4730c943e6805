use blackjack_engine::cards::{full_shoe, Card, Rank, Suit};
use blackjack_engine::deck::Deck;
use blackjack_engine::errors::GameError;

#[test]
fn drawn_and_remaining_cards_make_up_the_shoe() {
    let mut deck = Deck::new_with_seed(2, 99);
    assert_eq!(deck.size(), 104);
    let mut drawn: Vec<Card> = (0..30).map(|_| deck.draw().expect("card")).collect();
    assert_eq!(deck.remaining(), 74);

    drawn.extend_from_slice(deck.cards());
    drawn.sort();
    let mut shoe = full_shoe(2);
    shoe.sort();
    assert_eq!(drawn, shoe);
}

#[test]
fn drawing_past_the_end_fails() {
    let mut deck = Deck::new_with_seed(1, 5);
    for i in 0..52 {
        assert!(deck.draw().is_ok(), "draw {} should succeed", i);
    }
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn same_seed_draws_same_sequence() {
    let mut d1 = Deck::new_with_seed(6, 12345);
    let mut d2 = Deck::new_with_seed(6, 12345);
    let a: Vec<Card> = (0..20).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..20).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical draws");
}

#[test]
fn different_seeds_draw_differently() {
    let mut d1 = Deck::new_with_seed(1, 1);
    let mut d2 = Deck::new_with_seed(1, 2);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different draws (high probability)"
    );
}

#[test]
fn removed_card_is_never_drawn() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let mut deck = Deck::new_with_seed(1, 77);
    deck.remove(ace).expect("ace present");
    assert_eq!(deck.remaining(), 51);
    while let Ok(card) = deck.draw() {
        assert_ne!(card, ace);
    }
    assert_eq!(deck.remove(ace), Err(GameError::CardNotFound(ace)));
}
