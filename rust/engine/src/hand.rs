use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Values a run of cards the blackjack way.
///
/// Every Ace starts at 11; while the total is over 21 and an Ace is still
/// counted high, one Ace at a time drops to 1. Returns the total and whether
/// an Ace is still counted as 11 (a soft hand). The cards are only read.
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::hand::hand_value;
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// assert_eq!(hand_value(&cards), (21, true));
/// ```
pub fn hand_value(cards: &[Card]) -> (u8, bool) {
    let mut total: u32 = 0;
    let mut high_aces = 0;
    for card in cards {
        total += u32::from(card.value());
        if card.rank.is_ace() {
            high_aces += 1;
        }
    }
    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    (total.min(u32::from(u8::MAX)) as u8, high_aces > 0)
}

/// One hand at the table: its cards in draw order, the money riding on it and
/// whether it has stood. Totals are always derived from `cards`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    wager: f64,
    stood: bool,
}

impl Hand {
    pub fn new(wager: f64) -> Self {
        Self {
            cards: Vec::with_capacity(4),
            wager,
            stood: false,
        }
    }

    pub fn with_cards(cards: Vec<Card>, wager: f64) -> Self {
        Self {
            cards,
            wager,
            stood: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn wager(&self) -> f64 {
        self.wager
    }

    pub fn is_stood(&self) -> bool {
        self.stood
    }

    pub fn value(&self) -> (u8, bool) {
        hand_value(&self.cards)
    }

    pub fn total(&self) -> u8 {
        self.value().0
    }

    pub fn is_soft(&self) -> bool {
        self.value().1
    }

    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Two cards totalling 21. Whether that counts as a natural is decided by
    /// the round, which knows if the cards came from the initial deal.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    pub fn is_soft_17(&self) -> bool {
        self.value() == (17, true)
    }

    /// Neither stood nor busted.
    pub fn is_active(&self) -> bool {
        !self.stood && !self.is_bust()
    }

    pub fn can_hit(&self) -> bool {
        self.is_active()
    }

    pub fn can_double(&self) -> bool {
        self.is_active() && self.cards.len() == 2
    }

    pub fn can_split(&self) -> bool {
        self.is_active() && self.cards.len() == 2 && self.cards[0].value() == self.cards[1].value()
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(!self.stood, "stood hand received a card");
        self.cards.push(card);
    }

    pub(crate) fn stand(&mut self) {
        self.stood = true;
    }

    pub(crate) fn double_wager(&mut self) {
        self.wager *= 2.0;
    }

    /// Moves the first card into a new hand carrying the same wager.
    pub(crate) fn split_off(&mut self) -> Hand {
        let first = self.cards.remove(0);
        Hand::with_cards(vec![first], self.wager)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total: {}, Cards: [", self.total())?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
