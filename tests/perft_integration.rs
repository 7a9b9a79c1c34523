//! Deeper perft cross-checks against known ground-truth node counts.
//! These run long enough that they're marked `#[ignore]` rather than part
//! of the default `cargo test` run; invoke with `cargo test -- --ignored`.

use weir::{board::position_from_fen, perft::perft};

#[test]
#[ignore]
fn startpos_depth_5_and_6() {
    let pos = weir::board::default_position();
    assert_eq!(perft(&pos, 5), 4_865_609);
    assert_eq!(perft(&pos, 6), 119_060_324);
}

#[test]
#[ignore]
fn kiwipete_depth_5() {
    let pos = position_from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    assert_eq!(perft(&pos, 5), 193_690_690);
}

#[test]
#[ignore]
fn ep_discovered_check_pin_depth_7() {
    let pos = position_from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(perft(&pos, 7), 178_633_661);
}

#[test]
#[ignore]
fn captured_rook_loses_castling_right_depth_6() {
    let pos = position_from_fen(
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    )
    .unwrap();
    assert_eq!(perft(&pos, 6), 706_045_033);
}

#[test]
#[ignore]
fn enemy_knight_taking_rook_depth_5() {
    let pos = position_from_fen(
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    )
    .unwrap();
    assert_eq!(perft(&pos, 5), 89_941_194);
}

#[test]
#[ignore]
fn promotion_castling_mix_depth_5() {
    let pos = position_from_fen(
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    )
    .unwrap();
    assert_eq!(perft(&pos, 5), 164_075_551);
}
