use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::session::Session;
use crate::domain::PlayerId;
use crate::engine::RandomSource;

/// Почему закончился раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEndReason {
    /// Остался один не выбывший игрок.
    LastPlayerStanding,
    /// Колода исчерпана: выигрывает старшая карта на руках.
    DeckExhausted,
}

/// Итог завершившегося раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Кому достался жетон (None — выживших с картой не нашлось).
    pub winner: Option<PlayerId>,
    pub reason: RoundEndReason,
}

/// Проверка конца раунда. Вызывается после каждого применённого эффекта,
/// условия — строго в этом порядке: сначала последний выживший, потом
/// исчерпание колоды.
///
/// Если раунд закончился — начисляет жетон и пересдаёт карты; возвращает
/// None, если раунд продолжается.
pub fn check_round_end<R: RandomSource>(
    session: &mut Session,
    rng: &mut R,
) -> Option<RoundOutcome> {
    if session.active_count() <= 1 {
        let winner_seat = session.players.iter().position(|p| p.is_active());
        return Some(finish_round(
            session,
            rng,
            winner_seat,
            RoundEndReason::LastPlayerStanding,
        ));
    }

    if session.deck.is_empty() {
        // Старшая карта среди оставшихся с картой на руке;
        // при равенстве побеждает меньший индекс места.
        let winner_seat = session
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active() && !p.hand.is_empty())
            .max_by_key(|(seat, p)| (p.hand[0].value(), Reverse(*seat)))
            .map(|(seat, _)| seat);
        return Some(finish_round(
            session,
            rng,
            winner_seat,
            RoundEndReason::DeckExhausted,
        ));
    }

    None
}

/// Начислить жетон, пересдать карты и открыть свежую летопись итогом.
fn finish_round<R: RandomSource>(
    session: &mut Session,
    rng: &mut R,
    winner_seat: Option<usize>,
    reason: RoundEndReason,
) -> RoundOutcome {
    let winner_id = winner_seat.map(|s| session.players[s].id.clone());
    let winner_name = winner_seat.map(|s| session.players[s].name.clone());

    if let Some(seat) = winner_seat {
        session.players[seat].tokens += 1;
    }

    let outcome_line = match (&winner_name, reason) {
        (Some(name), RoundEndReason::LastPlayerStanding) => {
            format!("{name} won the round (last player standing).")
        }
        (Some(name), RoundEndReason::DeckExhausted) => {
            format!("{name} won the round (highest card when deck empty).")
        }
        (None, _) => "No one won the round.".to_string(),
    };

    // Пересдача очищает летопись, поэтому итог кладём уже в свежую.
    deal_new_round(session, rng);
    session.log.push(outcome_line);

    RoundOutcome {
        winner: winner_id,
        reason,
    }
}

/// Общая раздача: свежая колода, сжигание, по карте каждому, сброс флагов,
/// чистая летопись. Используется и стартом сессии, и пересдачей.
pub(crate) fn deal_round<R: RandomSource>(session: &mut Session, rng: &mut R) {
    let mut deck = Deck::love_letter_16();
    rng.shuffle(&mut deck.cards);

    session.burn = deck.draw_one();
    for player in &mut session.players {
        player.hand.clear();
        player.eliminated = false;
        player.protected = false;
        if let Some(card) = deck.draw_one() {
            player.hand.push(card);
        }
    }
    session.deck = deck;
    session.log.clear();
}

/// Пересдача между раундами: ход переходит к месту 0, оно и добирает.
pub(crate) fn deal_new_round<R: RandomSource>(session: &mut Session, rng: &mut R) {
    deal_round(session, rng);
    session.current_player_index = 0;
    if let Some(card) = session.deck.draw_one() {
        session.players[0].hand.push(card);
    }
}
