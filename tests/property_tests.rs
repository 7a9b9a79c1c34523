//! Property tests for the round-trip laws in the crate's own design
//! document: every position reachable from the start position should
//! round-trip losslessly through its FEN, and `move_from_uci` should never
//! panic no matter what garbage string it's handed.

use proptest::prelude::*;
use weir::{
    board::{self, default_position, movegen, Position},
    notation::{move_from_uci, move_to_uci},
};

/// Plays up to `choices.len()` plies from the start position, picking the
/// `choice % moves.len()`-th legal move at each ply, and returns the final
/// position. Stops early if a ply has no legal moves.
fn play_from_choices(choices: &[u8]) -> Position {
    let mut pos = default_position();
    for &choice in choices {
        let checked = board::in_check(&pos);
        let moves = movegen::generate_moves(&pos, checked);
        if moves.is_empty() {
            break;
        }

        let mut legal_idx = None;
        for offset in 0..moves.len() {
            let idx = (choice as usize + offset) % moves.len();
            let mv = moves[idx];
            let child = board::apply_move(&pos, mv);
            if board::is_legal(&child, mv, checked) {
                legal_idx = Some(idx);
                break;
            }
        }

        let Some(idx) = legal_idx else { break };
        let mv = moves[idx];
        pos = board::apply_move(&pos, mv);
    }
    pos
}

proptest! {
    #[test]
    fn fen_round_trips_after_random_play(choices in prop::collection::vec(any::<u8>(), 0..40)) {
        let pos = play_from_choices(&choices);
        let fen = pos.to_string();
        let reparsed: Position = fen.parse().expect("a position we just printed must reparse");
        prop_assert_eq!(pos.hash(), reparsed.hash());
        prop_assert_eq!(pos.mg_val(), reparsed.mg_val());
        prop_assert_eq!(pos.eg_val(), reparsed.eg_val());
        prop_assert_eq!(fen, reparsed.to_string());
    }

    #[test]
    fn move_from_uci_never_panics(s in "\\PC{0,8}") {
        let pos = default_position();
        let _ = move_from_uci(&pos, &s);
    }

    #[test]
    fn generated_moves_round_trip_through_uci(choices in prop::collection::vec(any::<u8>(), 0..20)) {
        let pos = play_from_choices(&choices);
        let checked = board::in_check(&pos);
        let moves = movegen::generate_moves(&pos, checked);
        for mv in moves {
            let child = board::apply_move(&pos, mv);
            if !board::is_legal(&child, mv, checked) {
                continue;
            }
            let uci = move_to_uci(mv);
            let parsed = move_from_uci(&pos, &uci);
            prop_assert_eq!(move_to_uci(parsed), uci);
        }
    }
}
