use serde::{Deserialize, Serialize};

use crate::domain::card::CardKind;
use crate::domain::{PlayerId, SessionCode};

/// Команда верхнего уровня.
///
/// Один дискриминированный payload на все мутации — ровно то, что
/// транспортный слой принимает от клиента и отдаёт обработчику.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать новую сессию.
    CreateSession(CreateSessionCommand),

    /// Присоединиться к ещё не начавшейся сессии.
    JoinSession(JoinSessionCommand),

    /// Стартовать сессию: раздать карты, включить ходы.
    StartSession(StartSessionCommand),

    /// Сообщение в чат сессии.
    Chat(ChatCommand),

    /// Ход игрока.
    Play(PlayCommand),
}

/// Создание сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateSessionCommand {
    /// Имя первого игрока (создателя).
    pub player_name: String,
    /// Токен игрока, если клиент принёс свой; иначе сгенерируем.
    pub player_id: Option<PlayerId>,
}

/// Присоединение к сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JoinSessionCommand {
    pub code: SessionCode,
    pub player_name: String,
    pub player_id: Option<PlayerId>,
}

/// Старт сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartSessionCommand {
    pub code: SessionCode,
    /// Кто жмёт «старт» — ему достанется первый ход.
    pub player_id: PlayerId,
}

/// Сообщение в чат.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatCommand {
    pub code: SessionCode,
    pub player_id: Option<PlayerId>,
    /// Фоллбэк-имя, если токен не принесли или он никому не принадлежит.
    pub player_name: Option<String>,
    pub message: String,
}

/// Ход игрока.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayCommand {
    pub code: SessionCode,
    pub player_id: PlayerId,
    /// Индекс карты в руке (0 или 1).
    pub card_index: usize,
    /// Цель (для целевых карт).
    pub target_id: Option<PlayerId>,
    /// Предположение (только для Стражницы).
    pub guessed_kind: Option<CardKind>,
}
