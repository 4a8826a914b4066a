use std::hint::black_box;

use brickfall_core::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

/// Plays until the game ends or `max_steps` commands were issued, steering
/// the paddle under the ball.
fn rally(mut engine: SimulationEngine, max_steps: usize) -> SimulationEngine {
    engine.launch();
    for _ in 0..max_steps {
        let ball_x = engine.ball().position.0;
        let step = if ball_x < engine.paddle() {
            engine.move_paddle(PaddleMove::Left)
        } else if ball_x > engine.paddle() {
            engine.move_paddle(PaddleMove::Right)
        } else {
            Ok(engine.tick())
        };
        if matches!(step, Ok(outcome) if outcome.is_terminal()) {
            break;
        }
    }
    engine
}

fn bench_rally(c: &mut Criterion) {
    let mut group = c.benchmark_group("rally");
    for kind in LayoutKind::ALL {
        group.bench_function(format!("{kind:?}"), |b| {
            b.iter_batched(
                || {
                    let mut engine = SimulationEngine::new(BoardConfig::new((40, 30)));
                    engine.build_board(kind.id(), 2);
                    engine
                },
                |engine| black_box(rally(engine, 5_000)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_scatter_200x200", |b| {
        b.iter(|| ScatterLayout::default().place_blocks(black_box((198, 195)), 3))
    });
}

criterion_group!(benches, bench_rally, bench_build);
criterion_main!(benches);
