//! Движок Love Letter: правила игры, жизненный цикл сессии, эффекты карт.
//!
//! Слои:
//! - domain — карты, колода, игроки, сессия;
//! - engine — валидация ходов, эффекты, контроль раунда, менеджер сессий;
//! - api — команды/запросы/DTO и обработчик команд поверх хранилища;
//! - infra — RNG, генерация кодов, границы хранения и уведомлений.
//!
//! Транспорт, долговременное хранение и доставка уведомлений — внешние
//! коллабораторы: ядро описывает их только трейтами в `infra`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
