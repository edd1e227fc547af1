use crate::domain::card::CardKind;
use crate::domain::session::Session;
use crate::engine::actions::PlayAction;
use crate::engine::errors::EngineError;

/// Ход, прошедший все проверки: токены уже разрешены в места.
#[derive(Clone, Copy, Debug)]
pub struct ValidatedPlay {
    /// Место ходящего игрока.
    pub seat: usize,
    /// Индекс разыгрываемой карты в руке.
    pub card_index: usize,
    /// Вид разыгрываемой карты.
    pub kind: CardKind,
    /// Место цели (для целевых карт).
    pub target_seat: Option<usize>,
    /// Предположение Стражницы.
    pub guess: Option<CardKind>,
}

/// Нужна ли карте цель.
pub fn requires_target(kind: CardKind) -> bool {
    matches!(
        kind,
        CardKind::Guard | CardKind::Priest | CardKind::Baron | CardKind::Prince | CardKind::King
    )
}

/// Полная проверка хода, строго до каких-либо мутаций.
///
/// Порядок фиксирован: игрок, очередь, выбывание, индекс карты, правило
/// Графини, затем цель и предпосылки эффекта. Ни одна проверка не меняет
/// состояние — отклонённый ход оставляет сессию ровно такой, какой была.
pub fn validate_play(session: &Session, action: &PlayAction) -> Result<ValidatedPlay, EngineError> {
    if !session.started {
        return Err(EngineError::NotStarted);
    }

    let seat = session
        .seat_of(&action.player_id)
        .ok_or_else(|| EngineError::PlayerNotFound(action.player_id.clone()))?;

    if seat != session.current_player_index {
        return Err(EngineError::NotYourTurn(action.player_id.clone()));
    }

    let player = &session.players[seat];
    if player.eliminated {
        return Err(EngineError::PlayerEliminated(action.player_id.clone()));
    }

    if action.card_index >= player.hand.len() {
        return Err(EngineError::InvalidCardIndex(action.card_index));
    }

    let kind = player.hand[action.card_index].kind;

    // Правило Графини: проверяем ДО того, как карта покинет руку.
    if matches!(kind, CardKind::King | CardKind::Prince) {
        let holds_countess = player
            .hand
            .iter()
            .enumerate()
            .any(|(i, c)| i != action.card_index && c.kind == CardKind::Countess);
        if holds_countess {
            return Err(EngineError::CountessRule);
        }
    }

    let target_seat = resolve_target(session, action, seat, kind)?;
    validate_effect_preconditions(session, action, seat, kind, target_seat)?;

    Ok(ValidatedPlay {
        seat,
        card_index: action.card_index,
        kind,
        target_seat,
        guess: action.guessed_kind,
    })
}

/// Разрешить цель в место и проверить её легальность.
fn resolve_target(
    session: &Session,
    action: &PlayAction,
    seat: usize,
    kind: CardKind,
) -> Result<Option<usize>, EngineError> {
    if !requires_target(kind) {
        return Ok(None);
    }

    let target_id = action
        .target_id
        .as_deref()
        .ok_or(EngineError::TargetRequired(kind))?;

    let target_seat = session
        .seat_of(target_id)
        .ok_or_else(|| EngineError::TargetNotFound(target_id.to_string()))?;

    // На себя можно направить только Принца.
    if target_seat == seat && kind != CardKind::Prince {
        return Err(EngineError::SelfTargetNotAllowed(kind));
    }

    // Защита Служанки действует одинаково для любой целевой карты,
    // включая принудительный сброс Принцем.
    if target_seat != seat && session.players[target_seat].protected {
        return Err(EngineError::TargetProtected);
    }

    Ok(Some(target_seat))
}

/// Предпосылки эффекта, обязанные выполняться до первой мутации.
fn validate_effect_preconditions(
    session: &Session,
    action: &PlayAction,
    seat: usize,
    kind: CardKind,
    target_seat: Option<usize>,
) -> Result<(), EngineError> {
    let target = target_seat.map(|t| &session.players[t]);

    match kind {
        CardKind::Guard => {
            match action.guessed_kind {
                // Угадывать саму Стражницу запрещено всегда.
                Some(CardKind::Guard) | None => return Err(EngineError::InvalidGuess),
                Some(_) => {}
            }
            if target.map_or(true, |t| t.hand.is_empty()) {
                return Err(EngineError::TargetHasNoCard);
            }
        }

        CardKind::Priest => {
            if target.map_or(true, |t| t.hand.is_empty()) {
                return Err(EngineError::TargetHasNoCard);
            }
        }

        CardKind::Baron | CardKind::King => {
            // После розыгрыша у ходящего должна остаться карта, и у цели тоже.
            let actor_keeps_card = session.players[seat].hand.len() == 2;
            let target_has_card = target.map_or(false, |t| !t.hand.is_empty());
            if !actor_keeps_card || !target_has_card {
                return Err(EngineError::CardRequiredOnBothSides);
            }
        }

        CardKind::Prince => {
            // У цели должна быть карта на сброс; при игре в себя считаем
            // руку без разыгрываемого Принца.
            let has_discard = if target_seat == Some(seat) {
                session.players[seat].hand.len() == 2
            } else {
                target.map_or(false, |t| !t.hand.is_empty())
            };
            if !has_discard {
                return Err(EngineError::TargetHasNoCard);
            }
        }

        CardKind::Handmaid | CardKind::Countess | CardKind::Princess => {}
    }

    Ok(())
}
