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

use arrayvec::ArrayVec;

use crate::defs::{Piece, PieceType, Side, Square};

/// The maximum number of pseudo-legal moves a single position can have.
pub const MAX_MOVES: usize = 200;

/// A fixed-capacity list of generated moves.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// A kind of move, carrying enough information to drive both incremental
/// hash/eval updates and apply-move bookkeeping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoveKind(pub u8);

impl MoveKind {
    /// A non-capture, non-special move.
    pub const QUIET: Self = Self(0);
    /// A pawn two-square push; sets the en passant square.
    pub const DOUBLE: Self = Self(1);
    /// A plain capture.
    pub const CAP: Self = Self(2);
    /// White kingside castling.
    pub const W_KSIDE: Self = Self(3);
    /// White queenside castling.
    pub const W_QSIDE: Self = Self(4);
    /// Black kingside castling.
    pub const B_KSIDE: Self = Self(5);
    /// Black queenside castling.
    pub const B_QSIDE: Self = Self(6);
    /// A non-capturing promotion.
    pub const PROMO: Self = Self(7);
    /// A capturing promotion to knight.
    pub const N_PROMO_CAP: Self = Self(8);
    /// A capturing promotion to rook.
    pub const R_PROMO_CAP: Self = Self(9);
    /// A capturing promotion to bishop.
    pub const B_PROMO_CAP: Self = Self(10);
    /// A capturing promotion to queen.
    pub const Q_PROMO_CAP: Self = Self(11);
    /// An en passant capture.
    pub const EP: Self = Self(12);

    #[must_use]
    #[inline]
    const fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// A packed move identifier: `from` (6 bits), `to` (6 bits), moving piece (4
/// bits), "extra" piece (4 bits, meaning depends on kind), move kind (4
/// bits).
///
/// The all-zero bit pattern is reserved as [`Move::NULL`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Move(u32);

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const EXTRA_SHIFT: u32 = 16;
const KIND_SHIFT: u32 = 20;

const SQUARE_MASK: u32 = 0x3f;
const PIECE_MASK: u32 = 0xf;
const KIND_MASK: u32 = 0xf;

impl Move {
    /// The reserved "no move" sentinel.
    pub const NULL: Self = Self(0);

    /// Packs a new [`Move`] from its fields.
    #[must_use]
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece, extra: Piece, kind: MoveKind) -> Self {
        Self(
            (from.0 as u32) << FROM_SHIFT
                | (to.0 as u32) << TO_SHIFT
                | (piece.0 as u32) << PIECE_SHIFT
                | (extra.0 as u32) << EXTRA_SHIFT
                | (kind.0 as u32) << KIND_SHIFT,
        )
    }

    #[must_use]
    #[inline]
    pub const fn from(self) -> Square {
        Square(((self.0 >> FROM_SHIFT) & SQUARE_MASK) as u8)
    }

    #[must_use]
    #[inline]
    pub const fn to(self) -> Square {
        Square(((self.0 >> TO_SHIFT) & SQUARE_MASK) as u8)
    }

    #[must_use]
    #[inline]
    pub const fn piece(self) -> Piece {
        Piece(((self.0 >> PIECE_SHIFT) & PIECE_MASK) as u8)
    }

    /// The "extra" piece: the captured piece for captures, the promotion
    /// piece for non-capturing promotions, unused for everything else.
    #[must_use]
    #[inline]
    pub const fn extra(self) -> Piece {
        Piece(((self.0 >> EXTRA_SHIFT) & PIECE_MASK) as u8)
    }

    #[must_use]
    #[inline]
    pub const fn kind(self) -> MoveKind {
        MoveKind(((self.0 >> KIND_SHIFT) & KIND_MASK) as u8)
    }

    /// Whether this move is a capture (plain, en passant, or
    /// capture-promotion).
    #[must_use]
    #[inline]
    pub const fn is_capture(self) -> bool {
        let kind = self.kind().0;
        kind == MoveKind::CAP.0
            || kind == MoveKind::EP.0
            || (kind >= MoveKind::N_PROMO_CAP.0 && kind <= MoveKind::Q_PROMO_CAP.0)
    }

    /// Whether this move promotes a pawn.
    #[must_use]
    #[inline]
    pub const fn is_promotion(self) -> bool {
        let kind = self.kind().0;
        kind == MoveKind::PROMO.0 || (kind >= MoveKind::N_PROMO_CAP.0 && kind <= MoveKind::Q_PROMO_CAP.0)
    }

    /// Whether this move is one of the four castling kinds.
    #[must_use]
    #[inline]
    pub const fn is_castling(self) -> bool {
        let kind = self.kind().0;
        kind >= MoveKind::W_KSIDE.0 && kind <= MoveKind::B_QSIDE.0
    }

    /// The promotion piece for this move, given the mover's `side`.
    ///
    /// For [`MoveKind::PROMO`] this is simply the "extra" field. For a
    /// capturing promotion, the colour-parity trick recovers it from the
    /// kind: `KNIGHT + 2*(kind - N_PROMO_CAP) + side`.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if called on a non-promoting move.
    #[must_use]
    #[inline]
    pub fn promotion_piece(self, side: Side) -> Piece {
        let kind = self.kind();
        if kind == MoveKind::PROMO {
            self.extra()
        } else {
            debug_assert!(self.is_promotion(), "not a promoting move");
            let offset = kind.to_index() - MoveKind::N_PROMO_CAP.to_index();
            Piece(Piece::WKNIGHT.0 + 2 * offset as u8 + side.0)
        }
    }

    /// The promotion piece type, independent of colour.
    #[must_use]
    #[inline]
    pub fn promotion_piece_type(self) -> PieceType {
        let kind = self.kind();
        if kind == MoveKind::PROMO {
            PieceType::from(self.extra())
        } else {
            let offset = kind.to_index() - MoveKind::N_PROMO_CAP.to_index();
            PieceType(PieceType::KNIGHT.0 + offset as u8)
        }
    }
}
