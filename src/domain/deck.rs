use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardKind};

/// Фиксированный состав колоды: (вид, количество копий).
pub const DECK_COMPOSITION: [(CardKind, usize); 8] = [
    (CardKind::Guard, 5),
    (CardKind::Priest, 2),
    (CardKind::Baron, 2),
    (CardKind::Handmaid, 2),
    (CardKind::Prince, 2),
    (CardKind::King, 1),
    (CardKind::Countess, 1),
    (CardKind::Princess, 1),
];

/// Всего карт в колоде.
pub const DECK_SIZE: usize = 16;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Полная колода из 16 карт в порядке возрастания номинала.
    pub fn love_letter_16() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for (kind, count) in DECK_COMPOSITION {
            for _ in 0..count {
                cards.push(Card::new(kind));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
