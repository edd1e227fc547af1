use loveletter_engine::api::commands::{
    ChatCommand, Command, CreateSessionCommand, JoinSessionCommand, PlayCommand,
    StartSessionCommand,
};
use loveletter_engine::api::dto::CommandResponse;
use loveletter_engine::api::errors::ApiError;
use loveletter_engine::api::handle_command;
use loveletter_engine::api::queries::build_session_view;
use loveletter_engine::domain::card::{Card, CardKind};
use loveletter_engine::domain::deck::Deck;
use loveletter_engine::domain::player::Player;
use loveletter_engine::domain::session::Session;
use loveletter_engine::engine::errors::EngineError;
use loveletter_engine::infra::ids::IdGenerator;
use loveletter_engine::infra::notifications::CollectingNotifier;
use loveletter_engine::infra::persistence::{InMemorySessionStorage, SessionStorage};
use loveletter_engine::infra::rng::DeterministicRng;

/// Утилита: игрок с заданной рукой.
fn player(id: &str, name: &str, hand: &[CardKind]) -> Player {
    let mut p = Player::new(id.to_string(), name.to_string());
    p.hand = hand.iter().copied().map(Card::new).collect();
    p
}

/// Утилита: уже начавшаяся сессия с заданными руками и колодой.
fn session_with(players: Vec<Player>, deck: &[CardKind]) -> Session {
    Session {
        code: "AB12".to_string(),
        players,
        deck: Deck {
            cards: deck.iter().copied().map(Card::new).collect(),
        },
        burn: None,
        started: true,
        current_player_index: 0,
        log: Vec::new(),
        chat: Vec::new(),
    }
}

fn rng() -> DeterministicRng {
    DeterministicRng::from_seed(11)
}

// ----------------------
// tests для commands.rs
// ----------------------

#[test]
fn commands_round_trip_through_json() {
    let cmd = Command::Play(PlayCommand {
        code: "AB12".to_string(),
        player_id: "p_alice".to_string(),
        card_index: 0,
        target_id: Some("p_bob".to_string()),
        guessed_kind: Some(CardKind::Priest),
    });

    let json = serde_json::to_string(&cmd).expect("команда сериализуема");
    assert!(json.contains("\"Priest\""));
    assert!(json.contains("\"AB12\""));

    let parsed: Command = serde_json::from_str(&json).expect("команда разбирается обратно");
    match parsed {
        Command::Play(p) => {
            assert_eq!(p.code, "AB12");
            assert_eq!(p.card_index, 0);
            assert_eq!(p.target_id.as_deref(), Some("p_bob"));
            assert_eq!(p.guessed_kind, Some(CardKind::Priest));
        }
        _ => panic!("Expected Command::Play"),
    }
}

#[test]
fn create_command_round_trips_without_optional_fields() {
    let cmd = Command::CreateSession(CreateSessionCommand {
        player_name: "Alice".to_string(),
        player_id: None,
    });

    let json = serde_json::to_string(&cmd).expect("команда сериализуема");
    let parsed: Command = serde_json::from_str(&json).expect("команда разбирается обратно");
    match parsed {
        Command::CreateSession(c) => {
            assert_eq!(c.player_name, "Alice");
            assert!(c.player_id.is_none());
        }
        _ => panic!("Expected Command::CreateSession"),
    }
}

// ----------------------
// tests для errors.rs
// ----------------------

#[test]
fn api_error_buckets_engine_errors() {
    let invalid_state: ApiError = EngineError::AlreadyStarted.into();
    match invalid_state {
        ApiError::InvalidState(msg) => {
            assert!(msg.contains("уже началась"), "unexpected message: {msg}");
        }
        other => panic!("Expected InvalidState, got {other:?}"),
    }

    let validation: ApiError = EngineError::CountessRule.into();
    match validation {
        ApiError::Validation(msg) => {
            assert!(msg.contains("Графин"), "unexpected message: {msg}");
        }
        other => panic!("Expected Validation, got {other:?}"),
    }

    let validation: ApiError = EngineError::TargetProtected.into();
    assert!(matches!(validation, ApiError::Validation(_)));
}

// ----------------------
// tests для handler.rs
// ----------------------

#[test]
fn create_join_start_through_handler() {
    let mut storage = InMemorySessionStorage::new();
    let mut notifier = CollectingNotifier::new();
    let ids = IdGenerator::new();
    let mut rng = rng();

    let created = handle_command(
        &mut storage,
        &mut notifier,
        &ids,
        &mut rng,
        Command::CreateSession(CreateSessionCommand {
            player_name: "Alice".to_string(),
            player_id: Some("p_alice".to_string()),
        }),
    )
    .unwrap();

    let code = match created {
        CommandResponse::SessionCreated { code, player_id } => {
            assert_eq!(player_id, "p_alice", "клиентский токен уважаем");
            assert_eq!(code.len(), 4);
            code
        }
        other => panic!("Expected SessionCreated, got {other:?}"),
    };

    let joined = handle_command(
        &mut storage,
        &mut notifier,
        &ids,
        &mut rng,
        Command::JoinSession(JoinSessionCommand {
            code: code.clone(),
            player_name: "Bob".to_string(),
            player_id: None,
        }),
    )
    .unwrap();

    let bob = match joined {
        CommandResponse::Joined { player_id } => player_id,
        other => panic!("Expected Joined, got {other:?}"),
    };
    assert!(bob.starts_with("p_"), "сгенерированный токен: {bob}");

    handle_command(
        &mut storage,
        &mut notifier,
        &ids,
        &mut rng,
        Command::StartSession(StartSessionCommand {
            code: code.clone(),
            player_id: "p_alice".to_string(),
        }),
    )
    .unwrap();

    let session = storage.get(&code).expect("сессия сохранена");
    assert!(session.started);
    assert_eq!(session.players.len(), 2);
    assert_eq!(session.players[0].hand.len(), 2);
    assert_eq!(session.players[1].hand.len(), 1);
    assert_eq!(session.deck.len(), 12);
}

#[test]
fn unknown_code_is_not_found_and_writes_nothing() {
    let mut storage = InMemorySessionStorage::new();
    let mut notifier = CollectingNotifier::new();
    let ids = IdGenerator::new();
    let mut rng = rng();

    let err = handle_command(
        &mut storage,
        &mut notifier,
        &ids,
        &mut rng,
        Command::JoinSession(JoinSessionCommand {
            code: "ZZZZ".to_string(),
            player_name: "Bob".to_string(),
            player_id: None,
        }),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(code) if code == "ZZZZ"));
    assert!(storage.is_empty());
}

#[test]
fn rejected_play_leaves_stored_session_unchanged() {
    let mut storage = InMemorySessionStorage::new();
    let mut notifier = CollectingNotifier::new();
    let ids = IdGenerator::new();
    let mut rng = rng();

    let session = session_with(
        vec![
            player("a", "Alice", &[CardKind::Guard, CardKind::Priest]),
            player("b", "Bob", &[CardKind::Baron]),
        ],
        &[CardKind::Guard, CardKind::Guard],
    );
    storage.upsert("AB12", session.clone());

    // Ходит не тот игрок.
    let err = handle_command(
        &mut storage,
        &mut notifier,
        &ids,
        &mut rng,
        Command::Play(PlayCommand {
            code: "AB12".to_string(),
            player_id: "b".to_string(),
            card_index: 0,
            target_id: Some("a".to_string()),
            guessed_kind: None,
        }),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(
        storage.get("AB12").unwrap(),
        session,
        "отклонённая команда не пишет в хранилище"
    );
}

#[test]
fn play_through_handler_returns_actor_view_and_notifies_reveals() {
    let mut storage = InMemorySessionStorage::new();
    let mut notifier = CollectingNotifier::new();
    let ids = IdGenerator::new();
    let mut rng = rng();

    let session = session_with(
        vec![
            player("a", "Alice", &[CardKind::Priest, CardKind::Guard]),
            player("b", "Bob", &[CardKind::Princess]),
        ],
        &[CardKind::Guard, CardKind::Guard],
    );
    storage.upsert("AB12", session);

    let resp = handle_command(
        &mut storage,
        &mut notifier,
        &ids,
        &mut rng,
        Command::Play(PlayCommand {
            code: "AB12".to_string(),
            player_id: "a".to_string(),
            card_index: 0,
            target_id: Some("b".to_string()),
            guessed_kind: None,
        }),
    )
    .unwrap();

    match resp {
        CommandResponse::SessionState(view) => {
            let me = view.players.iter().find(|p| p.player_id == "a").unwrap();
            assert_eq!(me.hand.as_deref(), Some(&[Card::new(CardKind::Guard)][..]));

            // Чужая рука наружу не уходит, виден только её размер.
            let other = view.players.iter().find(|p| p.player_id == "b").unwrap();
            assert!(other.hand.is_none());
            assert_eq!(other.hand_size, 2);
        }
        other => panic!("Expected SessionState, got {other:?}"),
    }

    assert_eq!(notifier.reveals.len(), 1);
    assert_eq!(notifier.reveals[0].recipient, "a");
    assert_eq!(notifier.reveals[0].owner, "b");
    assert_eq!(notifier.reveals[0].card, Card::new(CardKind::Princess));
}

#[test]
fn chat_resolves_sender_with_fallbacks() {
    let mut storage = InMemorySessionStorage::new();
    let mut notifier = CollectingNotifier::new();
    let ids = IdGenerator::new();
    let mut rng = rng();

    let mut session = session_with(
        vec![
            player("a", "Alice", &[]),
            player("b", "Bob", &[]),
        ],
        &[],
    );
    session.started = false;
    storage.upsert("AB12", session);

    let mut send = |player_id: Option<&str>, player_name: Option<&str>, message: &str,
                    storage: &mut InMemorySessionStorage,
                    notifier: &mut CollectingNotifier| {
        handle_command(
            storage,
            notifier,
            &ids,
            &mut rng,
            Command::Chat(ChatCommand {
                code: "AB12".to_string(),
                player_id: player_id.map(str::to_string),
                player_name: player_name.map(str::to_string),
                message: message.to_string(),
            }),
        )
        .unwrap()
    };

    send(Some("a"), None, "по токену", &mut storage, &mut notifier);
    send(Some("ghost"), Some("Guest"), "по имени", &mut storage, &mut notifier);
    send(None, None, "аноним", &mut storage, &mut notifier);

    let chat = storage.get("AB12").unwrap().chat;
    assert_eq!(chat.len(), 3);
    assert_eq!(chat[0].sender, "Alice");
    assert_eq!(chat[1].sender, "Guest");
    assert_eq!(chat[2].sender, "Unknown");
}

// ----------------------
// tests для queries.rs
// ----------------------

#[test]
fn session_view_hides_deck_and_other_hands() {
    let session = session_with(
        vec![
            player("a", "Alice", &[CardKind::Guard, CardKind::Priest]),
            player("b", "Bob", &[CardKind::Baron]),
        ],
        &[CardKind::Guard, CardKind::Guard],
    );

    let view = build_session_view(&session, |pid| pid == "a");

    assert_eq!(view.code, "AB12");
    assert!(view.started);
    assert_eq!(view.deck_remaining, 2);
    assert_eq!(view.current_player_seat, Some(0));

    let hero = &view.players[0];
    assert!(hero.hand.is_some());
    assert_eq!(hero.hand_size, 2);

    let other = &view.players[1];
    assert!(other.hand.is_none(), "чужая рука скрыта");
    assert_eq!(other.hand_size, 1);
}

#[test]
fn session_view_before_start_has_no_current_seat() {
    let mut session = session_with(vec![player("a", "Alice", &[])], &[]);
    session.started = false;

    let view = build_session_view(&session, |_| false);
    assert!(!view.started);
    assert_eq!(view.current_player_seat, None);
    assert_eq!(view.deck_remaining, 0);
}
