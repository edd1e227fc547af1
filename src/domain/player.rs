use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Состояние игрока в сессии.
///
/// Место за столом игрок занимает на всю жизнь сессии: выбывание действует
/// только до конца раунда, жетоны копятся между раундами.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Рука: 0, 1 или 2 карты (2 — только у ходящего сразу после добора).
    pub hand: Vec<Card>,
    /// Жетоны за выигранные раунды.
    pub tokens: u32,
    /// Выбыл из текущего раунда.
    pub eliminated: bool,
    /// Защищён Служанкой до начала своего следующего хода.
    pub protected: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            hand: Vec::new(),
            tokens: 0,
            eliminated: false,
            protected: false,
        }
    }

    /// Участвует ли игрок в текущем раунде.
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }
}
