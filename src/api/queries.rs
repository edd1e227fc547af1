use serde::{Deserialize, Serialize};

use crate::domain::session::Session;
use crate::domain::{PlayerId, SessionCode};

use super::dto::{PlayerViewDto, SessionViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Снэпшот сессии глазами конкретного игрока.
    GetSession {
        code: SessionCode,
        /// Чья точка зрения: его рука раскрыта, чужие — нет.
        viewer: Option<PlayerId>,
    },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Session(SessionViewDto),
}

/// Сформировать DTO сессии.
///
/// Чужие руки наружу не отдаём: карты видит только `is_hero`-игрок,
/// остальным доступен лишь размер руки. Вся мутация идёт через команды,
/// этот снэпшот — только чтение.
pub fn build_session_view(session: &Session, is_hero: impl Fn(&str) -> bool) -> SessionViewDto {
    let players = session
        .players
        .iter()
        .enumerate()
        .map(|(idx, p)| PlayerViewDto {
            player_id: p.id.clone(),
            display_name: p.name.clone(),
            seat_index: idx as u8,
            tokens: p.tokens,
            eliminated: p.eliminated,
            protected: p.protected,
            hand_size: p.hand.len() as u8,
            hand: if is_hero(&p.id) {
                Some(p.hand.clone())
            } else {
                None
            },
        })
        .collect();

    SessionViewDto {
        code: session.code.clone(),
        started: session.started,
        players,
        deck_remaining: session.deck.len() as u8,
        current_player_seat: if session.started {
            Some(session.current_player_index as u8)
        } else {
            None
        },
        log: session.log.clone(),
        chat: session.chat.clone(),
    }
}
