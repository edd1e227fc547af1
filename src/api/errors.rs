use serde::{Deserialize, Serialize};

use crate::domain::SessionCode;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Сессия с таким кодом не найдена.
    NotFound(SessionCode),

    /// Действие не подходит к текущей фазе жизненного цикла
    /// (start по уже начавшейся сессии, join после старта и т.п.).
    InvalidState(String),

    /// Ход отклонён правилами: неверный индекс карты, недопустимая цель
    /// или предположение.
    Validation(String),

    /// Сбой коллаборатора (хранилище, уведомления).
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotStarted
            | EngineError::AlreadyStarted
            | EngineError::TooManyPlayers { .. } => ApiError::InvalidState(err.to_string()),

            _ => ApiError::Validation(err.to_string()),
        }
    }
}
