// src/engine/session_manager.rs

use std::collections::HashMap;

use crate::domain::player::Player;
use crate::domain::session::Session;
use crate::domain::{PlayerId, SessionCode};
use crate::engine::actions::PlayAction;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{self, TurnOutcome};
use crate::engine::RandomSource;

/// Ошибки уровня менеджера сессий (над движком одной сессии).
#[derive(Debug)]
pub enum ManagerError {
    /// Сессия с таким кодом не найдена.
    SessionNotFound(SessionCode),

    /// Проброшенная ошибка движка (EngineError).
    Engine(EngineError),
}

impl From<EngineError> for ManagerError {
    fn from(e: EngineError) -> Self {
        ManagerError::Engine(e)
    }
}

/// Менеджер сессий:
/// - хранит сессии по коду;
/// - даёт create/join/start/chat/play поверх функций game_loop;
/// - `&mut self` на каждой операции и есть сериализация по коду:
///   одновременно в полёте не больше одной мутации.
pub struct SessionManager {
    sessions: HashMap<SessionCode, Session>,
}

impl SessionManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Создать сессию с одним посаженным игроком.
    ///
    /// Код и токен генерирует вызывающий (см. `infra::ids`) — менеджер
    /// только сажает создателя. Существующая сессия с тем же кодом
    /// заменяется.
    pub fn create_session(&mut self, code: SessionCode, player_id: PlayerId, player_name: &str) {
        let session = Session::new(
            code.clone(),
            Player::new(player_id, player_name.to_string()),
        );
        self.sessions.insert(code, session);
    }

    /// Есть ли сессия с таким кодом.
    pub fn has_session(&self, code: &str) -> bool {
        self.sessions.contains_key(code)
    }

    /// Получить ссылку на сессию (read-only).
    pub fn session(&self, code: &str) -> Option<&Session> {
        self.sessions.get(code)
    }

    /// Получить ссылку на сессию (mutable).
    pub fn session_mut(&mut self, code: &str) -> Option<&mut Session> {
        self.sessions.get_mut(code)
    }

    /// Посадить игрока в сессию (идемпотентно по токену и имени).
    pub fn join(
        &mut self,
        code: &str,
        display_name: &str,
        candidate_id: PlayerId,
    ) -> Result<PlayerId, ManagerError> {
        let session = self
            .sessions
            .get_mut(code)
            .ok_or_else(|| ManagerError::SessionNotFound(code.to_string()))?;

        Ok(game_loop::join_session(session, display_name, candidate_id)?)
    }

    /// Стартовать сессию: раздать карты, первый ход — инициатору.
    pub fn start<R: RandomSource>(
        &mut self,
        code: &str,
        requester_id: &str,
        rng: &mut R,
    ) -> Result<(), ManagerError> {
        let session = self
            .sessions
            .get_mut(code)
            .ok_or_else(|| ManagerError::SessionNotFound(code.to_string()))?;

        Ok(game_loop::start_round(session, requester_id, rng)?)
    }

    /// Сообщение в чат сессии.
    pub fn chat(
        &mut self,
        code: &str,
        sender_id: Option<&str>,
        sender_name: Option<&str>,
        message: String,
    ) -> Result<(), ManagerError> {
        let session = self
            .sessions
            .get_mut(code)
            .ok_or_else(|| ManagerError::SessionNotFound(code.to_string()))?;

        game_loop::append_chat(session, sender_id, sender_name, message);
        Ok(())
    }

    /// Применить ход игрока в конкретной сессии.
    pub fn play<R: RandomSource>(
        &mut self,
        code: &str,
        action: &PlayAction,
        rng: &mut R,
    ) -> Result<TurnOutcome, ManagerError> {
        let session = self
            .sessions
            .get_mut(code)
            .ok_or_else(|| ManagerError::SessionNotFound(code.to_string()))?;

        Ok(game_loop::apply_play(session, action, rng)?)
    }
}
