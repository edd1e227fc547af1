use crate::domain::card::CardKind;
use crate::domain::PlayerId;

use thiserror::Error;

/// Ошибки движка Love Letter.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Сессия ещё не началась")]
    NotStarted,

    #[error("Сессия уже началась")]
    AlreadyStarted,

    #[error("Слишком много игроков: {seats}, колоды хватает максимум на {max}")]
    TooManyPlayers { seats: usize, max: usize },

    #[error("Игрок {0} не найден в сессии")]
    PlayerNotFound(PlayerId),

    #[error("Сейчас не ход игрока {0}")]
    NotYourTurn(PlayerId),

    #[error("Игрок {0} выбыл из раунда")]
    PlayerEliminated(PlayerId),

    #[error("Неверный индекс карты: {0}")]
    InvalidCardIndex(usize),

    #[error("Правило Графини: с Королём или Принцем на руке нужно сбросить Графиню")]
    CountessRule,

    #[error("Для карты {0} нужна цель")]
    TargetRequired(CardKind),

    #[error("Цель {0} не найдена в сессии")]
    TargetNotFound(PlayerId),

    #[error("Цель защищена Служанкой")]
    TargetProtected,

    #[error("Карту {0} нельзя направить на себя")]
    SelfTargetNotAllowed(CardKind),

    #[error("Недопустимое предположение для Стражницы")]
    InvalidGuess,

    #[error("У цели нет карты")]
    TargetHasNoCard,

    #[error("Для сравнения обе стороны должны держать карту")]
    CardRequiredOnBothSides,
}
