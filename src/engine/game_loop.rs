//! Оркестровка хода: валидация, эффект, проверка конца раунда, передача хода.

use crate::domain::deck::DECK_SIZE;
use crate::domain::player::Player;
use crate::domain::session::{ChatEntry, Session};
use crate::domain::PlayerId;
use crate::engine::actions::PlayAction;
use crate::engine::effects::{self, PrivateReveal};
use crate::engine::errors::EngineError;
use crate::engine::round::{self, RoundOutcome};
use crate::engine::validation::validate_play;
use crate::engine::RandomSource;

/// Статус раунда после применённого хода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// Раунд продолжается, ход передан дальше.
    Ongoing,
    /// Раунд завершился, карты уже пересданы.
    RoundFinished(RoundOutcome),
}

/// Результат одного хода для внешнего кода.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    pub status: TurnStatus,
    /// Приватное вскрытие для ходившего (эффект Priest).
    pub reveal: Option<PrivateReveal>,
}

/// Посадить игрока в ещё не начавшуюся сессию.
///
/// Идемпотентно: совпадение по токену или по имени возвращает уже
/// сидящего игрока, второе место не создаётся.
pub fn join_session(
    session: &mut Session,
    display_name: &str,
    candidate_id: PlayerId,
) -> Result<PlayerId, EngineError> {
    if session.started {
        return Err(EngineError::AlreadyStarted);
    }

    if let Some(existing) = session
        .players
        .iter()
        .find(|p| p.id == candidate_id || p.name == display_name)
    {
        return Ok(existing.id.clone());
    }

    session
        .players
        .push(Player::new(candidate_id.clone(), display_name.to_string()));

    Ok(candidate_id)
}

/// Старт сессии: сдать карты и отдать первый ход инициатору.
pub fn start_round<R: RandomSource>(
    session: &mut Session,
    requester_id: &str,
    rng: &mut R,
) -> Result<(), EngineError> {
    if session.started {
        return Err(EngineError::AlreadyStarted);
    }

    // По карте на игрока + сжигание + добор первому ходящему.
    let max_seats = DECK_SIZE - 2;
    if session.player_count() > max_seats {
        return Err(EngineError::TooManyPlayers {
            seats: session.player_count(),
            max: max_seats,
        });
    }

    round::deal_round(session, rng);
    session.started = true;
    // Неопознанный инициатор — ход отдаём месту 0.
    session.current_player_index = session.seat_of(requester_id).unwrap_or(0);
    if let Some(card) = session.deck.draw_one() {
        session.players[session.current_player_index]
            .hand
            .push(card);
    }

    Ok(())
}

/// Применить ход игрока.
///
/// Один ход — один атомарный переход: все проверки идут до первой мутации,
/// поэтому отклонённый ход оставляет сессию нетронутой.
pub fn apply_play<R: RandomSource>(
    session: &mut Session,
    action: &PlayAction,
    rng: &mut R,
) -> Result<TurnOutcome, EngineError> {
    let play = validate_play(session, action)?;

    // Карта покидает руку — намерение игрока зафиксировано.
    let card = session.players[play.seat].hand.remove(play.card_index);
    let actor_name = session.players[play.seat].name.clone();
    session.log.push(format!("{actor_name} played {}.", card.kind));

    let effect = effects::resolve_effect(session, &play);

    let status = match round::check_round_end(session, rng) {
        Some(outcome) => TurnStatus::RoundFinished(outcome),
        None => {
            advance_turn(session);
            TurnStatus::Ongoing
        }
    };

    Ok(TurnOutcome {
        status,
        reveal: effect.reveal,
    })
}

/// Добавить сообщение в чат.
///
/// Отправителя ищем по токену, затем по переданному имени, иначе "Unknown".
pub fn append_chat(
    session: &mut Session,
    sender_id: Option<&str>,
    sender_name: Option<&str>,
    message: String,
) {
    let sender = sender_id
        .and_then(|id| session.player(id))
        .map(|p| p.name.clone())
        .or_else(|| sender_name.map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string());

    session.chat.push(ChatEntry { sender, message });
}

/// Передать ход следующему не выбывшему месту по кругу.
///
/// Защита снимается ровно в момент возврата хода игроку, не раньше.
/// Проверка конца раунда уже гарантировала: есть кому ходить и колода
/// не пуста.
fn advance_turn(session: &mut Session) {
    let seats = session.players.len();
    let mut idx = session.current_player_index;
    loop {
        idx = (idx + 1) % seats;
        if session.players[idx].is_active() {
            break;
        }
    }

    session.current_player_index = idx;
    session.players[idx].protected = false;

    if let Some(card) = session.deck.draw_one() {
        session.players[idx].hand.push(card);
    }
}
