//! Clone cost of a mid-game state, the unit of speculative lookahead.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palace_engine::{GameState, PlayerId};

/// Advance a fresh game a few turns so the discard stack is populated.
fn mid_game(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    let mut player = PlayerId::ONE;
    for _ in 0..12 {
        match state.playable_cards(player).first() {
            Some(&card) => {
                state.select_cards(player, card);
                state.play_cards(player);
            }
            None => {
                state.take_discard_pile(player);
            }
        }
        player = player.opponent();
        state.set_turn(player);
    }
    state
}

fn bench_clone(c: &mut Criterion) {
    let state = mid_game(42);
    c.bench_function("state_clone", |b| b.iter(|| black_box(&state).clone()));
}

fn bench_legal_scan(c: &mut Criterion) {
    let state = mid_game(42);
    c.bench_function("playable_cards", |b| {
        b.iter(|| black_box(&state).playable_cards(PlayerId::ONE))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = mid_game(42);
    c.bench_function("snapshot_round_trip", |b| {
        b.iter(|| {
            let bytes = black_box(&state).to_bytes().unwrap();
            GameState::from_bytes(&bytes).unwrap()
        })
    });
}

criterion_group!(benches, bench_clone, bench_legal_scan, bench_snapshot);
criterion_main!(benches);
