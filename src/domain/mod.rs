//! Доменная модель Love Letter: карты, колода, игроки, сессия.

pub mod card;
pub mod deck;
pub mod player;
pub mod session;

/// Опаковый токен игрока. Его приносит клиент или генерирует infra;
/// движок только сверяет строки.
pub type PlayerId = String;

/// Короткий код сессии, по которому собираются участники.
pub type SessionCode = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use player::*;
pub use session::*;
