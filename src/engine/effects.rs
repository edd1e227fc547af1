use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardKind};
use crate::domain::session::Session;
use crate::domain::{PlayerId, SessionCode};
use crate::engine::validation::ValidatedPlay;

/// Приватное вскрытие карты (эффект Priest).
///
/// Движок только формирует событие; доставкой по адресату занимается
/// notification-коллаборатор (см. `infra::notifications`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivateReveal {
    pub session_code: SessionCode,
    /// Кому показываем карту.
    pub recipient: PlayerId,
    /// Чья карта вскрыта.
    pub owner: PlayerId,
    pub card: Card,
}

/// Результат применения эффекта карты.
#[derive(Clone, Debug, Default)]
pub struct EffectOutcome {
    pub reveal: Option<PrivateReveal>,
}

/// Применить эффект разыгранной карты.
///
/// Все предпосылки уже проверены в `validation`, разыгранная карта уже
/// покинула руку — здесь только мутации и летопись. Match закрытый:
/// новый вид карты не скомпилируется без своей ветки.
pub fn resolve_effect(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    match play.kind {
        CardKind::Guard => resolve_guard(session, play),
        CardKind::Priest => resolve_priest(session, play),
        CardKind::Baron => resolve_baron(session, play),
        CardKind::Handmaid => resolve_handmaid(session, play),
        CardKind::Prince => resolve_prince(session, play),
        CardKind::King => resolve_king(session, play),
        CardKind::Countess => resolve_countess(session, play),
        CardKind::Princess => resolve_princess(session, play),
    }
}

/// Стражница: угадал вид карты цели — цель выбывает.
fn resolve_guard(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    let target_seat = play.target_seat.expect("цель Стражницы уже разрешена");
    let guess = play.guess.expect("предположение уже проверено");

    let actor_name = session.players[play.seat].name.clone();
    let target_name = session.players[target_seat].name.clone();
    let actual = session.players[target_seat].hand[0].kind;

    if actual == guess {
        session.players[target_seat].eliminated = true;
        session.log.push(format!(
            "{actor_name} guessed {guess} correctly. {target_name} is eliminated."
        ));
    } else {
        session
            .log
            .push(format!("{actor_name} guessed {guess} and missed."));
    }

    EffectOutcome::default()
}

/// Священник: приватно показать карту цели ходившему.
fn resolve_priest(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    let target_seat = play.target_seat.expect("цель Священника уже разрешена");

    let reveal = PrivateReveal {
        session_code: session.code.clone(),
        recipient: session.players[play.seat].id.clone(),
        owner: session.players[target_seat].id.clone(),
        card: session.players[target_seat].hand[0],
    };

    // В летописи — только факт взаимодействия, без номинала.
    session.log.push(format!(
        "{} used Priest on {}.",
        session.players[play.seat].name, session.players[target_seat].name
    ));

    EffectOutcome {
        reveal: Some(reveal),
    }
}

/// Барон: сравнить оставшиеся карты, младшая выбывает, равенство — ничья.
fn resolve_baron(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    let target_seat = play.target_seat.expect("цель Барона уже разрешена");

    let actor_name = session.players[play.seat].name.clone();
    let target_name = session.players[target_seat].name.clone();
    let my_card = session.players[play.seat].hand[0];
    let their_card = session.players[target_seat].hand[0];

    if my_card.value() > their_card.value() {
        session.players[target_seat].eliminated = true;
        session.log.push(format!(
            "{actor_name} ({}) beat {target_name} ({}). {target_name} is eliminated.",
            my_card.kind, their_card.kind
        ));
    } else if my_card.value() < their_card.value() {
        session.players[play.seat].eliminated = true;
        session.log.push(format!(
            "{target_name} ({}) beat {actor_name} ({}). {actor_name} is eliminated.",
            their_card.kind, my_card.kind
        ));
    } else {
        session.log.push(format!(
            "{actor_name} and {target_name} tied with {}.",
            my_card.kind
        ));
    }

    EffectOutcome::default()
}

/// Служанка: защита до начала собственного следующего хода.
fn resolve_handmaid(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    session.players[play.seat].protected = true;
    let name = session.players[play.seat].name.clone();
    session
        .log
        .push(format!("{name} is protected until their next turn."));

    EffectOutcome::default()
}

/// Принц: цель безусловно сбрасывает карту и добирает новую.
fn resolve_prince(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    let target_seat = play.target_seat.expect("цель Принца уже разрешена");
    let target_name = session.players[target_seat].name.clone();

    let discarded = session.players[target_seat]
        .hand
        .pop()
        .expect("у цели есть карта на сброс: проверено в validation");

    session.log.push(format!(
        "{target_name} discarded {} due to Prince.",
        discarded.kind
    ));

    if discarded.kind == CardKind::Princess {
        session.players[target_seat].eliminated = true;
        session.log.push(format!(
            "{target_name} discarded the Princess and was eliminated."
        ));
    } else if let Some(card) = session.deck.draw_one() {
        session.players[target_seat].hand.push(card);
    }
    // Пустая колода — цель остаётся без карты; раунд тут же закроет
    // проверка исчерпания колоды.

    EffectOutcome::default()
}

/// Король: обменяться единственными картами с целью.
fn resolve_king(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    let target_seat = play.target_seat.expect("цель Короля уже разрешена");

    let actor_name = session.players[play.seat].name.clone();
    let target_name = session.players[target_seat].name.clone();

    let mine = session.players[play.seat].hand[0];
    let theirs = session.players[target_seat].hand[0];
    session.players[play.seat].hand[0] = theirs;
    session.players[target_seat].hand[0] = mine;

    session
        .log
        .push(format!("{actor_name} swapped hands with {target_name}."));

    EffectOutcome::default()
}

/// Графиня: чистая декларация, сброс уже состоялся.
fn resolve_countess(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    let name = session.players[play.seat].name.clone();
    session.log.push(format!("{name} discarded the Countess."));

    EffectOutcome::default()
}

/// Принцесса: сброс (добровольный или принудительный) выбивает владельца.
fn resolve_princess(session: &mut Session, play: &ValidatedPlay) -> EffectOutcome {
    session.players[play.seat].eliminated = true;
    let name = session.players[play.seat].name.clone();
    session.log.push(format!(
        "{name} discarded the Princess and was eliminated."
    ));

    EffectOutcome::default()
}
