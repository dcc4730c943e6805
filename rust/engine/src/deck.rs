use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_shoe, Card};
use crate::errors::GameError;

/// Remaining cards of one or more standard decks, drawn without replacement.
///
/// A deck built with an RNG hands out a uniformly random remaining card on
/// every [`draw`](Deck::draw). A [`stacked`](Deck::stacked) deck has no RNG and
/// deals its cards in the order given, which makes scripted rounds possible.
///
/// ```
/// use blackjack_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(1, 42);
/// let mut b = Deck::new_with_seed(1, 42);
/// assert_eq!(a.draw().unwrap(), b.draw().unwrap());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha20Rng> {
    /// Cards still in the deck; for a stacked deck the next card is last
    cards: Vec<Card>,
    /// Number of cards the deck started with
    size: usize,
    rng: Option<R>,
}

impl Deck<ChaCha20Rng> {
    pub fn new_with_seed(num_decks: u8, seed: u64) -> Self {
        Self::with_rng(num_decks, ChaCha20Rng::seed_from_u64(seed))
    }

    /// A deck that deals `cards` front to back.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self {
            size: cards.len(),
            cards,
            rng: None,
        }
    }
}

impl<R: Rng> Deck<R> {
    pub fn with_rng(num_decks: u8, rng: R) -> Self {
        let cards = full_shoe(num_decks);
        Self {
            size: cards.len(),
            cards,
            rng: Some(rng),
        }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        match &mut self.rng {
            Some(rng) => {
                let idx = rng.random_range(0..self.cards.len());
                Ok(self.cards.swap_remove(idx))
            }
            None => self.cards.pop().ok_or(GameError::EmptyDeck),
        }
    }

    /// Removes one instance of `card`. Other copies from further decks stay.
    pub fn remove(&mut self, card: Card) -> Result<(), GameError> {
        let pos = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(GameError::CardNotFound(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Returns a drawn card; on a stacked deck it becomes the next one dealt.
    pub(crate) fn put_back(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
