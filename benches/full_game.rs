//! Full-game throughput: deal, name, claim, and finish.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nanjamonja::game::GameEngine;
use nanjamonja::PlayerId;

fn play_to_end(seed: u64) -> usize {
    let mut engine = GameEngine::builder().seed(seed).build();
    engine.initialize_game(&["A", "B", "C", "D"]);

    let mut turn = 0u8;
    while let Some(card) = engine.flip_card() {
        if card.name.is_some() {
            engine.claim_card(PlayerId::new(turn % 4));
        } else {
            engine.register_name(card.character, "name");
        }
        engine.next_turn();
        turn = turn.wrapping_add(1);
    }
    engine.event_log().len()
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_4_players", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(play_to_end(black_box(seed)))
        })
    });
}

criterion_group!(benches, bench_full_game);
criterion_main!(benches);
