//! End-to-end play scenarios through the public API.
//!
//! Covers the basic flow of naming, recalling, claiming, rejected claims,
//! and reaction-window expiry.

use std::cell::Cell;
use std::rc::Rc;

use nanjamonja::core::ManualClock;
use nanjamonja::game::{GameEngine, Phase};
use nanjamonja::settings::SettingsPatch;
use nanjamonja::timer::ReactionTimer;
use nanjamonja::{EventKind, PlayerId, DECK_SIZE};

fn new_game(seed: u64) -> (GameEngine, ManualClock) {
    let clock = ManualClock::new(1_700_000_000_000);
    let mut engine = GameEngine::builder().seed(seed).clock(clock.clone()).build();
    engine.initialize_game(&["Alice", "Bob"]);
    (engine, clock)
}

/// First flip is unnamed; a character can be named exactly once.
#[test]
fn test_first_naming() {
    let (mut engine, _) = new_game(42);

    assert_eq!(engine.deck_count(), DECK_SIZE);
    assert!(engine.players().iter().all(|p| p.score() == 0));

    let card = engine.flip_card().expect("deck is full");
    assert!(card.name.is_none());

    assert!(engine.register_name(card.character, "Fluffy"));
    assert!(!engine.register_name(card.character, "Mr. Whiskers"));
    assert_eq!(engine.character_name(card.character), Some("Fluffy"));
}

/// A later copy of a named character arrives already named, and claiming
/// it takes the whole discard pile.
#[test]
fn test_recall_and_claim() {
    let (mut engine, _) = new_game(42);

    let first = engine.flip_card().unwrap();
    assert!(engine.register_name(first.character, "Fluffy"));
    assert!(engine.current_card().is_none());
    assert_eq!(engine.discard_count(), 1);

    // Flip until another copy of the named character shows up; everything
    // else goes to the discard pile unclaimed.
    let recalled = loop {
        let card = engine.flip_card().expect("four copies remain in the deck");
        if card.character == first.character {
            break card;
        }
        assert!(card.name.is_none());
        engine.add_to_discard_pile();
    };
    assert_eq!(recalled.name.as_deref(), Some("Fluffy"));

    let pot = engine.discard_count() + 1;
    assert_eq!(engine.try_claim_card(PlayerId::new(0)), Ok(pot));
    assert_eq!(engine.discard_count(), 0);
    assert_eq!(engine.players()[0].score(), pot);
    assert_eq!(engine.players()[0].collected_cards().len(), pot);
    assert_eq!(engine.session().total_cards(), DECK_SIZE);
}

/// Claiming with nothing face-up is rejected and changes nothing.
#[test]
fn test_claim_without_card() {
    let (mut engine, _) = new_game(7);
    let log_len = engine.event_log().len();

    assert!(!engine.claim_card(PlayerId::new(0)));
    assert!(!engine.claim_card(PlayerId::new(1)));

    assert_eq!(engine.deck_count(), DECK_SIZE);
    assert_eq!(engine.discard_count(), 0);
    assert_eq!(engine.event_log().len(), log_len);
    assert!(engine.players().iter().all(|p| p.score() == 0));
}

/// With a one second window, the card is discarded exactly once at 1000ms
/// and the callback fires once no matter how many ticks follow.
#[test]
fn test_reaction_window_expiry() {
    let (mut engine, clock) = new_game(9);
    engine.update_settings(&SettingsPatch::new().reaction_time_limit(1000));

    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    let mut timer = ReactionTimer::new().on_expire(move || counter.set(counter.get() + 1));

    engine.flip_card().unwrap();
    clock.advance(1000);
    let reading = timer.tick(&mut engine);

    assert!(reading.is_expired);
    assert!(engine.is_timer_expired());
    assert!(engine.current_card().is_none());
    assert_eq!(engine.discard_count(), 1);
    assert_eq!(fired.get(), 1);

    for _ in 0..10 {
        clock.advance(100);
        timer.tick(&mut engine);
    }
    assert_eq!(fired.get(), 1);
    assert_eq!(engine.discard_count(), 1);
}

/// A full game with a naive table: the first seat names everything new and
/// the second seat claims everything known.
#[test]
fn test_full_game_reaches_game_over() {
    let (mut engine, _) = new_game(2024);

    while let Some(card) = engine.flip_card() {
        if card.name.is_some() {
            assert!(engine.claim_and_advance(PlayerId::new(1)));
        } else {
            assert!(engine.name_and_advance(card.character, &format!("Critter {}", card.character.raw())));
        }
    }

    assert_eq!(engine.phase(), Phase::Over);
    assert_eq!(engine.deck_count(), 0);
    assert_eq!(engine.session().character_names().len(), 12);

    let alice = engine.players()[0].score();
    let bob = engine.players()[1].score();
    assert_eq!(alice, 0);
    assert_eq!(bob + engine.discard_count(), DECK_SIZE);

    let winner = engine.winner().unwrap();
    assert_eq!(winner.name(), "Bob");

    let last = engine.events().last().cloned().unwrap();
    assert_eq!(last.to_string(), format!("Game Over! Winner: Bob ({bob} points)"));
    assert!(matches!(last.kind, EventKind::GameOver { .. }));
}

/// History messages follow the order of play.
#[test]
fn test_event_history_text() {
    let (mut engine, _) = new_game(5);
    let card = engine.flip_card().unwrap();
    engine.register_name(card.character, "Blob");
    engine.next_turn();

    let lines: Vec<String> = engine.events().iter().map(ToString::to_string).collect();
    assert_eq!(lines[0], "Game started with 2 players");
    assert_eq!(lines[1], format!("Character #{} flipped (new!)", card.character.raw()));
    assert_eq!(lines[2], format!("Alice named character #{} as \"Blob\"", card.character.raw()));
    assert_eq!(lines[3], "Bob's turn");

    let ids: Vec<u64> = engine.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}
