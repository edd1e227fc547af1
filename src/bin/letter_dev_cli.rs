// src/bin/letter_dev_cli.rs

use loveletter_engine::api::commands::{
    ChatCommand, Command, CreateSessionCommand, JoinSessionCommand, PlayCommand,
    StartSessionCommand,
};
use loveletter_engine::api::dto::CommandResponse;
use loveletter_engine::api::handle_command;
use loveletter_engine::domain::card::CardKind;
use loveletter_engine::engine::validation::requires_target;
use loveletter_engine::infra::{
    CollectingNotifier, IdGenerator, InMemorySessionStorage, RngSeed, SessionStorage,
};

fn main() {
    println!("=== LOVE LETTER DEV CLI ===\n");

    let mut storage = InMemorySessionStorage::new();
    let mut notifier = CollectingNotifier::new();
    let ids = IdGenerator::new();

    // Фиксированный seed: демо воспроизводимо от запуска к запуску.
    let mut rng = RngSeed::from_u64(2024).to_rng();

    // Создаём сессию, команду показываем в JSON — так её шлёт транспорт.
    let create = Command::CreateSession(CreateSessionCommand {
        player_name: "Alice".to_string(),
        player_id: None,
    });
    println!(
        "-> {}",
        serde_json::to_string(&create).expect("команда сериализуема")
    );

    let (code, alice) = match handle_command(&mut storage, &mut notifier, &ids, &mut rng, create) {
        Ok(CommandResponse::SessionCreated { code, player_id }) => (code, player_id),
        other => panic!("неожиданный ответ на create: {other:?}"),
    };
    println!("Создана сессия {code}, Alice = {alice}\n");

    // Сажаем ещё двоих.
    for name in ["Bob", "Carol"] {
        let join = Command::JoinSession(JoinSessionCommand {
            code: code.clone(),
            player_name: name.to_string(),
            player_id: None,
        });
        match handle_command(&mut storage, &mut notifier, &ids, &mut rng, join) {
            Ok(CommandResponse::Joined { player_id }) => {
                println!("{name} присоединился: {player_id}");
            }
            other => panic!("неожиданный ответ на join: {other:?}"),
        }
    }

    let chat = Command::Chat(ChatCommand {
        code: code.clone(),
        player_id: Some(alice.clone()),
        player_name: None,
        message: "go!".to_string(),
    });
    handle_command(&mut storage, &mut notifier, &ids, &mut rng, chat).expect("chat проходит");

    let start = Command::StartSession(StartSessionCommand {
        code: code.clone(),
        player_id: alice.clone(),
    });
    handle_command(&mut storage, &mut notifier, &ids, &mut rng, start).expect("start проходит");
    println!("\nСессия стартовала, играем до 3 жетонов.\n");

    // Автопилот: на каждом ходу перебираем варианты и играем первый легальный.
    let mut turn = 0;
    loop {
        turn += 1;
        if turn > 200 {
            println!("Лимит ходов исчерпан, выходим.");
            break;
        }

        let session = storage.get(&code).expect("сессия существует");

        if let Some(done) = session.players.iter().find(|p| p.tokens >= 3) {
            println!("\n{} набрал 3 жетона, демо окончено.", done.name);
            break;
        }

        let seat = session.current_player_index;
        let actor = session.players[seat].clone();

        let mut attempts: Vec<PlayCommand> = Vec::new();
        for (idx, card) in actor.hand.iter().enumerate() {
            if requires_target(card.kind) {
                for target in &session.players {
                    if target.id != actor.id && !target.eliminated && !target.protected {
                        attempts.push(PlayCommand {
                            code: code.clone(),
                            player_id: actor.id.clone(),
                            card_index: idx,
                            target_id: Some(target.id.clone()),
                            guessed_kind: (card.kind == CardKind::Guard)
                                .then_some(CardKind::Priest),
                        });
                    }
                }
                if card.kind == CardKind::Prince {
                    attempts.push(PlayCommand {
                        code: code.clone(),
                        player_id: actor.id.clone(),
                        card_index: idx,
                        target_id: Some(actor.id.clone()),
                        guessed_kind: None,
                    });
                }
            } else {
                attempts.push(PlayCommand {
                    code: code.clone(),
                    player_id: actor.id.clone(),
                    card_index: idx,
                    target_id: None,
                    guessed_kind: None,
                });
            }
        }

        let mut played = false;
        for cmd in attempts {
            match handle_command(&mut storage, &mut notifier, &ids, &mut rng, Command::Play(cmd)) {
                Ok(CommandResponse::SessionState(view)) => {
                    if let Some(line) = view.log.last() {
                        println!("[{turn:>3}] {line}");
                    }
                    played = true;
                    break;
                }
                Ok(_) => {}
                Err(_) => continue,
            }
        }

        if !played {
            // Все цели под Служанкой, а на руке только целевые карты.
            println!(
                "У {} не нашлось легального хода, останавливаем демо.",
                actor.name
            );
            break;
        }
    }

    let session = storage.get(&code).expect("сессия существует");
    println!("\nЖетоны:");
    for p in &session.players {
        println!("  {} — {}", p.name, p.tokens);
    }
    println!("Приватных вскрытий (Priest): {}", notifier.reveals.len());

    println!("\n=== LOVE LETTER DEV CLI DONE ===");
}
