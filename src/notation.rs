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

//! Conversions between [`Move`] and the long algebraic notation a UCI
//! front end exchanges with the engine. This module only packs/unpacks
//! bytes — it knows nothing about stdin, stdout, or the `position`/`go`
//! commands that would drive it.

use crate::{
    board::{self, movegen, Position},
    defs::{PieceType, Square},
    moves::Move,
};

/// Formats `mv` as coordinate notation (e.g. `"e2e4"`, `"e7e8q"`).
///
/// Castling is expressed as the king's own two-square move (`"e1g1"`),
/// the same convention UCI front ends use.
#[must_use]
pub fn move_to_uci(mv: Move) -> String {
    let mut s = format!("{}{}", mv.from(), mv.to());
    if mv.is_promotion() {
        s.push(promotion_letter(mv.promotion_piece_type()));
    }
    s
}

/// Parses a coordinate-notation move (e.g. `"e2e4"`, `"e7e8q"`) against
/// `pos`, resolving it to the fully-encoded [`Move`] the engine's own
/// generator would have produced.
///
/// Returns [`Move::NULL`] if `s` isn't well-formed, or doesn't name a
/// legal move in `pos`.
#[must_use]
pub fn move_from_uci(pos: &Position, s: &str) -> Move {
    if s.len() != 4 && s.len() != 5 {
        return Move::NULL;
    }

    let Ok(from) = s[0..2].parse::<Square>() else {
        return Move::NULL;
    };
    let Ok(to) = s[2..4].parse::<Square>() else {
        return Move::NULL;
    };
    let promo_letter = s.as_bytes().get(4).map(|&b| b as char);

    let in_check = board::in_check(pos);
    let candidates = movegen::generate_moves(pos, in_check);

    for mv in candidates {
        if mv.from() != from || mv.to() != to {
            continue;
        }
        let promo_matches = match (mv.is_promotion(), promo_letter) {
            (true, Some(letter)) => promotion_letter(mv.promotion_piece_type()) == letter,
            (false, None) => true,
            _ => false,
        };
        if !promo_matches {
            continue;
        }

        let child = board::apply_move(pos, mv);
        if board::is_legal(&child, mv, in_check) {
            return mv;
        }
    }

    Move::NULL
}

const fn promotion_letter(piece_type: PieceType) -> char {
    if piece_type.0 == PieceType::KNIGHT.0 {
        'n'
    } else if piece_type.0 == PieceType::BISHOP.0 {
        'b'
    } else if piece_type.0 == PieceType::ROOK.0 {
        'r'
    } else {
        'q'
    }
}

#[cfg(test)]
mod tests {
    use super::{move_from_uci, move_to_uci};
    use crate::board::default_position;

    #[test]
    fn round_trips_double_push() {
        let pos = default_position();
        let mv = move_from_uci(&pos, "e2e4");
        assert_ne!(mv, crate::moves::Move::NULL);
        assert_eq!(move_to_uci(mv), "e2e4");
    }

    #[test]
    fn rejects_malformed_input() {
        let pos = default_position();
        assert_eq!(move_from_uci(&pos, "e2"), crate::moves::Move::NULL);
        assert_eq!(move_from_uci(&pos, "z9z9"), crate::moves::Move::NULL);
    }

    #[test]
    fn rejects_illegal_move() {
        let pos = default_position();
        assert_eq!(move_from_uci(&pos, "e2e5"), crate::moves::Move::NULL);
    }
}
