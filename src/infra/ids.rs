use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::domain::{PlayerId, SessionCode};

/// Длина кода сессии.
const SESSION_CODE_LEN: usize = 4;

/// Длина случайной части токена игрока.
const PLAYER_ID_SUFFIX_LEN: usize = 7;

/// Генерация кодов сессий и токенов игроков.
///
/// Код короткий, удобный для диктовки: 4 символа в верхнем регистре.
/// Токен — опаковая строка вида `p_x7k29ab`. Уникальность кода проверяет
/// вызывающий по своему хранилищу (см. api::handler).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Новый код сессии (например, "K4ZQ").
    pub fn next_session_code(&self) -> SessionCode {
        let mut rng = rand::thread_rng();
        let code: String = (0..SESSION_CODE_LEN)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect();
        code.to_uppercase()
    }

    /// Новый токен игрока (например, "p_x7k29ab").
    pub fn next_player_id(&self) -> PlayerId {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..PLAYER_ID_SUFFIX_LEN)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect();
        format!("p_{}", suffix.to_lowercase())
    }
}
