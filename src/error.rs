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

use std::fmt::{self, Display, Formatter};

/// An error that occurs when a FEN string cannot be parsed.
#[allow(clippy::enum_variant_names)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Fewer than 4 space-separated fields were present.
    NotEnoughFields,
    /// The placement field didn't describe exactly 8 ranks of 8 files each.
    MalformedPlacement,
    /// A character in the placement field wasn't a valid piece letter, digit
    /// or separator.
    InvalidPieceChar,
    /// The side-to-move field wasn't `w` or `b`.
    InvalidSideToMove,
    /// The castling rights field contained a character other than
    /// `KQkq` or wasn't `-`.
    InvalidCastlingRights,
    /// The en passant field wasn't a valid square or `-`.
    InvalidEpSquare,
    /// The halfmove clock field wasn't a non-negative integer.
    InvalidHalfmoveClock,
    /// The fullmove counter field wasn't a positive integer.
    InvalidFullmoveCounter,
}

impl Display for ParseError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NotEnoughFields => "not enough space-separated fields in FEN",
            Self::MalformedPlacement => "piece placement field is not 8 ranks of 8 files",
            Self::InvalidPieceChar => "piece placement field contains an invalid character",
            Self::InvalidSideToMove => "side to move field is not `w` or `b`",
            Self::InvalidCastlingRights => "castling rights field contains an invalid character",
            Self::InvalidEpSquare => "en passant field is not a valid square or `-`",
            Self::InvalidHalfmoveClock => "halfmove clock is not a non-negative integer",
            Self::InvalidFullmoveCounter => "fullmove counter is not a positive integer",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}
