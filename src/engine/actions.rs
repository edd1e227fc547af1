use serde::{Deserialize, Serialize};

use crate::domain::card::CardKind;
use crate::domain::PlayerId;

/// Ход игрока: какую карту с руки он разыгрывает и против кого.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayAction {
    /// Кто ходит.
    pub player_id: PlayerId,
    /// Индекс карты в руке (0 или 1).
    pub card_index: usize,
    /// Цель (для Guard/Priest/Baron/Prince/King).
    pub target_id: Option<PlayerId>,
    /// Предполагаемый вид карты цели (только для Guard).
    pub guessed_kind: Option<CardKind>,
}
