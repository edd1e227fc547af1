use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::session::ChatEntry;
use crate::domain::{PlayerId, SessionCode};

/// DTO игрока в сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub display_name: String,
    pub seat_index: u8,
    pub tokens: u32,
    pub eliminated: bool,
    pub protected: bool,
    /// Размер руки виден всем.
    pub hand_size: u8,
    /// Сами карты — только для «героя» (запрашивающего игрока).
    pub hand: Option<Vec<Card>>,
}

/// DTO сессии: снэпшот для клиента.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionViewDto {
    pub code: SessionCode,
    pub started: bool,
    pub players: Vec<PlayerViewDto>,
    /// Сколько карт осталось в колоде (сами карты не раскрываем,
    /// сожжённую тоже).
    pub deck_remaining: u8,
    /// Место, чей сейчас ход (None до старта).
    pub current_player_seat: Option<u8>,
    pub log: Vec<String>,
    pub chat: Vec<ChatEntry>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Успех без доп. данных.
    Ok,

    /// Создана сессия: код и токен создателя.
    SessionCreated {
        code: SessionCode,
        player_id: PlayerId,
    },

    /// Игрок посажен (или уже сидел — идемпотентный join).
    Joined { player_id: PlayerId },

    /// Обновлённое состояние сессии глазами отправителя команды.
    SessionState(SessionViewDto),
}
