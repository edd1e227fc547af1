use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::SessionCode;

/// Сообщение в чате сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatEntry {
    pub sender: String,
    pub message: String,
}

/// Основное состояние сессии.
///
/// Порядок в `players` — это и порядок мест, и порядок ходов;
/// до старта join только дописывает в конец, после старта состав фиксирован.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub code: SessionCode,
    pub players: Vec<Player>,

    /// Колода добора текущего раунда.
    pub deck: Deck,

    /// Сожжённая карта раунда: лежит рубашкой вверх и в игру не возвращается.
    pub burn: Option<Card>,

    pub started: bool,

    /// Место игрока, чей сейчас ход.
    pub current_player_index: usize,

    /// Человекочитаемая летопись ходов (append-only).
    pub log: Vec<String>,

    /// Чат сессии (append-only).
    pub chat: Vec<ChatEntry>,
}

impl Session {
    /// Новая сессия: один посаженный игрок, пустая колода, игра не началась.
    pub fn new(code: SessionCode, first_player: Player) -> Self {
        Self {
            code,
            players: vec![first_player],
            deck: Deck { cards: Vec::new() },
            burn: None,
            started: false,
            current_player_index: 0,
            log: Vec::new(),
            chat: Vec::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Место игрока по его токену.
    pub fn seat_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Сколько игроков ещё не выбыло из раунда.
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }
}
