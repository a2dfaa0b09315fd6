use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use quince_chess::apply_move_to_game::apply_move_to_game;
use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::move_generator::legal_moves;

fn bench_legal_moves_startpos(c: &mut Criterion) {
    let game = GameState::new_game();
    let origins = game.movable_pieces();

    let mut group = c.benchmark_group("movegen");
    group.throughput(Throughput::Elements(origins.len() as u64));
    group.bench_function("legal_moves_all_active_pieces", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for origin in &origins {
                total += legal_moves(&game, black_box(*origin))
                    .expect("start position coordinates are on the board")
                    .len();
            }
            total
        })
    });
    group.finish();
}

fn bench_apply_move_sequence(c: &mut Criterion) {
    // Knights shuffle out and back on both sides.
    let script = [
        ((1, 0), (2, 2)),
        ((1, 7), (2, 5)),
        ((2, 2), (1, 0)),
        ((2, 5), (1, 7)),
    ];

    c.bench_function("apply_move_knight_shuffle", |b| {
        b.iter(|| {
            let mut game = GameState::new_game();
            for (from, to) in script {
                let (next, _) = apply_move_to_game(&game, black_box(from), black_box(to))
                    .expect("scripted moves are legal");
                game = next;
            }
            game.turn_count
        })
    });
}

criterion_group!(benches, bench_legal_moves_startpos, bench_apply_move_sequence);
criterion_main!(benches);
