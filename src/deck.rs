use crate::models::Card;
use rand::seq::SliceRandom;
use rand::Rng;

/// Cyclic, shuffled study order over all cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    order: Vec<usize>,
    cursor: usize,
    revealed: bool,
}

impl Deck {
    pub fn new<R: Rng + ?Sized>(cards: Vec<Card>, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        order.shuffle(rng);
        Self {
            cards,
            order,
            cursor: 0,
            revealed: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 1-based, for "card X of N".
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.order
            .get(self.cursor)
            .and_then(|&index| self.cards.get(index))
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Wraps back to the first card after the last one.
    pub fn advance(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.order.len();
        self.revealed = false;
    }
}
