use loveletter_engine::domain::card::{Card, CardKind};
use loveletter_engine::domain::deck::Deck;
use loveletter_engine::domain::player::Player;
use loveletter_engine::domain::session::Session;
use loveletter_engine::engine::actions::PlayAction;
use loveletter_engine::engine::game_loop::apply_play;
use loveletter_engine::infra::rng::DeterministicRng;

fn player(id: &str, name: &str, hand: &[CardKind]) -> Player {
    let mut p = Player::new(id.to_string(), name.to_string());
    p.hand = hand.iter().copied().map(Card::new).collect();
    p
}

fn session_with(players: Vec<Player>, deck: &[CardKind]) -> Session {
    Session {
        code: "TEST".to_string(),
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
    DeterministicRng::from_seed(7)
}

fn play(player_id: &str, card_index: usize) -> PlayAction {
    PlayAction {
        player_id: player_id.to_string(),
        card_index,
        target_id: None,
        guessed_kind: None,
    }
}

#[test]
fn turn_advancement_skips_eliminated_seats() {
    let mut session = session_with(
        vec![
            player("a", "Alice", &[CardKind::Handmaid, CardKind::Guard]),
            player("b", "Bob", &[]),
            player("c", "Carol", &[]),
            player("d", "Dave", &[CardKind::Guard]),
        ],
        &[CardKind::Guard, CardKind::Guard],
    );
    session.players[1].eliminated = true;
    session.players[2].eliminated = true;

    apply_play(&mut session, &play("a", 0), &mut rng()).unwrap();

    assert_eq!(session.current_player_index, 3, "места 1 и 2 пропущены");
    assert!(session.players[session.current_player_index].is_active());
    assert_eq!(session.players[3].hand.len(), 2, "новый ходящий добрал карту");
}

#[test]
fn skipped_seat_keeps_protection_flag() {
    let mut session = session_with(
        vec![
            player("a", "Alice", &[CardKind::Countess, CardKind::Guard]),
            player("b", "Bob", &[]),
            player("c", "Carol", &[CardKind::Priest]),
        ],
        &[CardKind::Guard, CardKind::Guard],
    );
    // Боб выбыл, но флаг защиты у него остался с прошлого хода;
    // у Кэрол защита активна, и ей сейчас передадут ход.
    session.players[1].eliminated = true;
    session.players[1].protected = true;
    session.players[2].protected = true;

    apply_play(&mut session, &play("a", 0), &mut rng()).unwrap();

    assert_eq!(session.current_player_index, 2);
    assert!(
        session.players[1].protected,
        "пропуск места не снимает защиту"
    );
    assert!(
        !session.players[2].protected,
        "возврат хода снимает защиту"
    );
}

#[test]
fn protection_lasts_until_own_turn_returns() {
    let mut session = session_with(
        vec![
            player("a", "Alice", &[CardKind::Handmaid, CardKind::Guard]),
            player("b", "Bob", &[CardKind::Countess]),
            player("c", "Carol", &[CardKind::Countess]),
        ],
        &[
            CardKind::Guard,
            CardKind::Guard,
            CardKind::Guard,
            CardKind::Guard,
        ],
    );

    apply_play(&mut session, &play("a", 0), &mut rng()).unwrap();
    assert!(session.players[0].protected);
    assert_eq!(session.current_player_index, 1);

    apply_play(&mut session, &play("b", 0), &mut rng()).unwrap();
    assert!(
        session.players[0].protected,
        "чужие ходы защиту не трогают"
    );
    assert_eq!(session.current_player_index, 2);

    apply_play(&mut session, &play("c", 0), &mut rng()).unwrap();
    assert_eq!(session.current_player_index, 0);
    assert!(
        !session.players[0].protected,
        "защита снята ровно при возврате хода"
    );
    assert_eq!(session.players[0].hand.len(), 2);
}
