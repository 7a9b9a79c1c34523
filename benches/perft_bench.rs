use criterion::{criterion_group, criterion_main, Criterion};
use weir::{board::position_from_fen, perft::perft};

/// Positions exercising different parts of the generator: startpos,
/// kiwipete (castling, pins, promotions all at once), and a position
/// where an en passant capture would be a discovered attack on the
/// mover's own king.
const POSITIONS: &[(&str, &str, u32)] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        5,
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        4,
    ),
    ("ep_pin", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 4),
];

fn perft_benchmark(c: &mut Criterion) {
    for &(name, fen, depth) in POSITIONS {
        let pos = position_from_fen(fen).expect("benchmark FEN must parse");
        c.bench_function(&format!("perft/{name}/{depth}"), |b| {
            b.iter(|| perft(&pos, depth));
        });
    }
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
