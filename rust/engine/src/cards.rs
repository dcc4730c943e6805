use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits never affect scoring; they only distinguish card identities.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Represents the rank of a playing card from Two through Ace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack, scores 10
    Jack,
    /// Queen, scores 10
    Queen,
    /// King, scores 10
    King,
    /// Ace, scores 11 unless demoted to 1 while valuing a hand
    Ace,
}

impl Rank {
    /// Base blackjack value: pips for 2-10, 10 for faces, 11 for an Ace.
    ///
    /// The Ace's alternative value of 1 is applied by
    /// [`hand_value`](crate::hand::hand_value), never stored on the card.
    pub fn value(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            pip => pip as u8,
        }
    }

    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A single playing card. Cards are plain values: once created neither the
/// rank nor the suit changes, and two cards from different decks with the
/// same rank and suit compare equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// Builds the cards of `num_decks` standard decks, 52 per deck.
pub fn full_shoe(num_decks: u8) -> Vec<Card> {
    let mut v = Vec::with_capacity(52 * num_decks as usize);
    for _ in 0..num_decks {
        for &s in &all_suits() {
            for &r in &all_ranks() {
                v.push(Card::new(r, s));
            }
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_score_ten_and_ace_eleven() {
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::Seven.value(), 7);
    }

    #[test]
    fn display_uses_suit_symbols() {
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10♠");
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "A♥");
    }

    #[test]
    fn shoe_has_correct_multiplicities() {
        let shoe = full_shoe(2);
        assert_eq!(shoe.len(), 104);
        let tens = shoe.iter().filter(|c| c.value() == 10).count();
        let aces = shoe.iter().filter(|c| c.rank.is_ace()).count();
        let nines = shoe.iter().filter(|c| c.rank == Rank::Nine).count();
        assert_eq!(tens, 32);
        assert_eq!(aces, 8);
        assert_eq!(nines, 8);
    }
}
