//! Внешний API движка Love Letter.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (создать сессию, присоединиться, ход игрока);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - обработчик (handler.rs) — применение команд поверх границы хранилища.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod handler;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handler::handle_command;
pub use queries::*;
