/*
 * Crab, a UCI-compatible chess engine
 * Copyright (C) 2024 Jasper Shovelton
 *
 * Crab is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Crab is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
 * details.
 *
 * You should have received a copy of the GNU General Public License along with
 * Crab. If not, see <https://www.gnu.org/licenses/>.
 */

//! Negamax alpha-beta search with a quiescence extension. Single call
//! stack, no transposition table, no iterative deepening — a driver
//! layer above this is expected to supply those.

use arrayvec::ArrayVec;

use crate::{
    board::{self, movegen, Position},
    defs::PieceType,
    eval::material_value,
    moves::{Move, MoveKind, MoveList, MAX_MOVES},
};

/// Parallel-by-index move-ordering scores, one per move in a [`MoveList`].
/// Fixed capacity, matching `MoveList` itself — search allocates nothing
/// after initialization.
type ScoreList = ArrayVec<i32, MAX_MOVES>;

/// Stand-in for "infinity": comfortably outside any real evaluation,
/// and safely negatable (unlike `i32::MIN`).
const INF: i32 = 1_000_000;

/// The scale factor the MVV/LVA formula multiplies victim/attacker value
/// ratios by, and the threshold `next_q_move`-style selection requires a
/// capture's score to clear.
const MVVLVA_MUL: i32 = 100;

/// The cost charged against delta pruning's optimistic margin.
const DELTA_MARGIN: i32 = 200;

/// Quiescence gives up and returns the stand-pat bound past this ply, to
/// bound the depth of capture chains in pathological positions.
const MAX_Q_PLY: u32 = 50;

/// Searches `pos` to `depth` plies, returning the best score (from the
/// side to move's perspective) and the move that achieves it.
#[must_use]
pub fn alpha_beta_root(pos: &Position, depth: u8, mut alpha: i32, beta: i32) -> (i32, Move) {
    #[cfg(feature = "logging")]
    log::debug!("root search: depth {depth}, window ({alpha}, {beta})");

    if depth == 0 {
        return (quiesce(pos, alpha, beta, 0), Move::NULL);
    }

    let checked = board::in_check(pos);
    let moves = movegen::generate_moves(pos, checked);
    let mut scores = score_moves(&moves);

    let mut best_move = Move::NULL;
    let mut best_score = -INF;

    while let Some(idx) = next_move(&mut scores, false) {
        let mv = moves[idx];
        let child = board::apply_move(pos, mv);
        if !board::is_legal(&child, mv, checked) {
            continue;
        }

        let score = -alpha_beta(&child, -beta, -alpha, depth - 1);
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        if score >= beta {
            #[cfg(feature = "logging")]
            log::debug!("root search: beta cutoff on {mv:?}, score {score}");
            return (beta, mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    let result = (if best_move == Move::NULL { alpha } else { best_score }, best_move);
    #[cfg(feature = "logging")]
    log::debug!("root search: best move {:?}, score {}", result.1, result.0);
    result
}

fn alpha_beta(pos: &Position, mut alpha: i32, beta: i32, depth: u8) -> i32 {
    if depth == 0 {
        return quiesce(pos, alpha, beta, 0);
    }

    let checked = board::in_check(pos);
    let moves = movegen::generate_moves(pos, checked);
    let mut scores = score_moves(&moves);

    while let Some(idx) = next_move(&mut scores, false) {
        let mv = moves[idx];
        let child = board::apply_move(pos, mv);
        if !board::is_legal(&child, mv, checked) {
            continue;
        }

        let score = -alpha_beta(&child, -beta, -alpha, depth - 1);
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Captures-only search extension. Does not re-check legality on
/// recursion: a pseudo-legal move that "captures" a king means the ply
/// above left its own king in check, and the resulting score of
/// [`INF`] (negated on the way back up) makes that illegal move look
/// catastrophic to whichever side played it — cheaper than running the
/// full legality check here.
fn quiesce(pos: &Position, mut alpha: i32, beta: i32, q_ply: u32) -> i32 {
    if q_ply > MAX_Q_PLY {
        return alpha;
    }

    let eval = board::evaluate(pos);
    if eval >= beta {
        return beta;
    }
    if eval > alpha {
        alpha = eval;
    }

    let captures = movegen::generate_captures(pos);
    let mut scores = score_moves(&captures);
    let endgame = board::is_endgame(pos);

    while let Some(idx) = next_move(&mut scores, true) {
        let mv = captures[idx];
        let captured_type = PieceType::from(mv.extra());
        if captured_type == PieceType::KING {
            return INF;
        }

        if !mv.is_promotion() && !endgame {
            let gain = material_value(captured_type);
            if eval + gain + DELTA_MARGIN < alpha {
                continue;
            }
        }

        let child = board::apply_move(pos, mv);
        let score = -quiesce(&child, -beta, -alpha, q_ply + 1);
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Scores every move in `moves` for ordering, parallel by index.
fn score_moves(moves: &MoveList) -> ScoreList {
    moves.iter().map(|&mv| score_move(mv)).collect()
}

/// MVV/LVA move ordering score. Captures are scored by a victim/attacker
/// value ratio so that winning exchanges sort first; quiet moves fall
/// back to the moving piece's own value.
fn score_move(mv: Move) -> i32 {
    let kind = mv.kind();

    if kind == MoveKind::EP {
        // pawn-takes-pawn: the ratio is always 100/100.
        return MVVLVA_MUL;
    }
    if kind == MoveKind::N_PROMO_CAP || kind == MoveKind::R_PROMO_CAP || kind == MoveKind::B_PROMO_CAP {
        return -10;
    }
    if kind == MoveKind::Q_PROMO_CAP {
        let victim = material_value(PieceType::from(mv.extra()));
        let queen = material_value(PieceType::QUEEN);
        return victim * MVVLVA_MUL / queen;
    }
    if kind == MoveKind::CAP {
        let victim = material_value(PieceType::from(mv.extra()));
        let attacker = material_value(PieceType::from(mv.piece()));
        return victim * MVVLVA_MUL / attacker;
    }

    material_value(PieceType::from(mv.piece()))
}

/// Linear-scan selection of the highest-scored unconsumed move, marking
/// it consumed (score set to [`i32::MIN`]) so it isn't returned again.
///
/// With `require_winning`, mirrors the quiescence-only variant that
/// additionally stops once the best remaining score no longer clears
/// [`MVVLVA_MUL`] — used to skip neutral or losing exchanges.
fn next_move(scores: &mut [i32], require_winning: bool) -> Option<usize> {
    let (idx, &best) = scores.iter().enumerate().max_by_key(|&(_, &s)| s)?;
    if best == i32::MIN {
        return None;
    }
    if require_winning && best <= MVVLVA_MUL {
        return None;
    }
    scores[idx] = i32::MIN;
    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::alpha_beta_root;
    use crate::board::{default_position, position_from_fen};

    #[test]
    fn prefers_capturing_hanging_queen() {
        let pos = position_from_fen("4k3/8/8/3q4/3R4/8/8/4K3 w - - 0 1").unwrap();
        let (_, best) = alpha_beta_root(&pos, 2, -1_000_000, 1_000_000);
        assert_eq!(crate::notation::move_to_uci(best), "d4d5");
    }

    #[test]
    fn startpos_returns_a_move() {
        let pos = default_position();
        let (_, best) = alpha_beta_root(&pos, 2, -1_000_000, 1_000_000);
        assert_ne!(best, crate::moves::Move::NULL);
    }
}
