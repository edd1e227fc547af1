//! Обработчик команд поверх границы хранилища.
//!
//! Паттерн один на все команды: целиком читаем сессию, валидируем и меняем
//! временную копию, одним upsert фиксируем результат. Отклонённая команда
//! не пишет в хранилище ничего.

use crate::api::commands::{
    ChatCommand, Command, CreateSessionCommand, JoinSessionCommand, PlayCommand,
    StartSessionCommand,
};
use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::api::queries::build_session_view;
use crate::domain::player::Player;
use crate::domain::session::Session;
use crate::engine::actions::PlayAction;
use crate::engine::{game_loop, RandomSource};
use crate::infra::ids::IdGenerator;
use crate::infra::notifications::RevealNotifier;
use crate::infra::persistence::SessionStorage;

/// Применить команду к хранимому состоянию.
pub fn handle_command<R: RandomSource>(
    storage: &mut dyn SessionStorage,
    notifier: &mut dyn RevealNotifier,
    ids: &IdGenerator,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateSession(cmd) => create_session(storage, ids, cmd),
        Command::JoinSession(cmd) => join_session(storage, ids, cmd),
        Command::StartSession(cmd) => start_session(storage, rng, cmd),
        Command::Chat(cmd) => chat(storage, cmd),
        Command::Play(cmd) => play(storage, notifier, rng, cmd),
    }
}

fn create_session(
    storage: &mut dyn SessionStorage,
    ids: &IdGenerator,
    cmd: CreateSessionCommand,
) -> Result<CommandResponse, ApiError> {
    // Код должен быть свободен: при коллизии просто генерируем другой.
    let code = loop {
        let candidate = ids.next_session_code();
        if storage.get(&candidate).is_none() {
            break candidate;
        }
    };
    let player_id = cmd.player_id.unwrap_or_else(|| ids.next_player_id());

    let session = Session::new(
        code.clone(),
        Player::new(player_id.clone(), cmd.player_name),
    );
    storage.upsert(&code, session);

    Ok(CommandResponse::SessionCreated { code, player_id })
}

fn join_session(
    storage: &mut dyn SessionStorage,
    ids: &IdGenerator,
    cmd: JoinSessionCommand,
) -> Result<CommandResponse, ApiError> {
    let mut session = storage
        .get(&cmd.code)
        .ok_or_else(|| ApiError::NotFound(cmd.code.clone()))?;

    let candidate_id = cmd.player_id.unwrap_or_else(|| ids.next_player_id());
    let player_id = game_loop::join_session(&mut session, &cmd.player_name, candidate_id)?;

    storage.upsert(&cmd.code, session);
    Ok(CommandResponse::Joined { player_id })
}

fn start_session<R: RandomSource>(
    storage: &mut dyn SessionStorage,
    rng: &mut R,
    cmd: StartSessionCommand,
) -> Result<CommandResponse, ApiError> {
    let mut session = storage
        .get(&cmd.code)
        .ok_or_else(|| ApiError::NotFound(cmd.code.clone()))?;

    game_loop::start_round(&mut session, &cmd.player_id, rng)?;

    storage.upsert(&cmd.code, session);
    Ok(CommandResponse::Ok)
}

fn chat(storage: &mut dyn SessionStorage, cmd: ChatCommand) -> Result<CommandResponse, ApiError> {
    let mut session = storage
        .get(&cmd.code)
        .ok_or_else(|| ApiError::NotFound(cmd.code.clone()))?;

    game_loop::append_chat(
        &mut session,
        cmd.player_id.as_deref(),
        cmd.player_name.as_deref(),
        cmd.message,
    );

    storage.upsert(&cmd.code, session);
    Ok(CommandResponse::Ok)
}

fn play<R: RandomSource>(
    storage: &mut dyn SessionStorage,
    notifier: &mut dyn RevealNotifier,
    rng: &mut R,
    cmd: PlayCommand,
) -> Result<CommandResponse, ApiError> {
    let mut session = storage
        .get(&cmd.code)
        .ok_or_else(|| ApiError::NotFound(cmd.code.clone()))?;

    let action = PlayAction {
        player_id: cmd.player_id.clone(),
        card_index: cmd.card_index,
        target_id: cmd.target_id,
        guessed_kind: cmd.guessed_kind,
    };

    let outcome = game_loop::apply_play(&mut session, &action, rng)?;

    // Состояние фиксируем до рассылки вскрытий: канал доставки
    // "хотя бы один раз" переживёт повтор, откат состояния — нет.
    storage.upsert(&cmd.code, session.clone());

    if let Some(reveal) = outcome.reveal {
        notifier.notify(reveal);
    }

    let view = build_session_view(&session, |pid| pid == cmd.player_id);
    Ok(CommandResponse::SessionState(view))
}
