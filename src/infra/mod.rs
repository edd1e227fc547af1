//! Инфраструктурный слой вокруг движка:
//! - генерация кодов сессий и токенов игроков;
//! - RNG-реализации для движка;
//! - абстракции хранения и приватных уведомлений (тесты, локальный запуск).

pub mod ids;
pub mod notifications;
pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use notifications::*;
pub use persistence::*;
pub use rng::*;
pub use rng_seed::RngSeed;
