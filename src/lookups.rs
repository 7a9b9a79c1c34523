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

mod magic;
mod util;

use magic::{Magic, BISHOP_MAGICS, ROOK_MAGICS};
use util::{bitboard_from_square, east, north, sliding_attacks, south, west};

use crate::{
    bitboard::Bitboard,
    defs::{PieceType, Side, Square},
    util::{cfor, get_unchecked},
};

/// The number of table entries needed for every rook blocker permutation
/// across all 64 squares.
const ROOK_SIZE: usize = 102_400;
/// The number of table entries needed for every bishop blocker permutation
/// across all 64 squares.
const BISHOP_SIZE: usize = 5_248;

/// Precomputed attack and magic-bitboard tables.
///
/// Every field is filled in at compile time by [`Lookup::new()`], so looking
/// values up at runtime never does anything more than array indexing.
pub struct Lookup {
    /// `pawn_attacks[side][square]`.
    pawn_attacks: [[Bitboard; Square::TOTAL]; Side::TOTAL],
    /// `knight_attacks[square]`.
    knight_attacks: [Bitboard; Square::TOTAL],
    /// `king_attacks[square]`.
    king_attacks: [Bitboard; Square::TOTAL],
    /// The combined rook and bishop attack table, indexed through
    /// [`Magic::get_table_index()`].
    magic_table: [Bitboard; ROOK_SIZE + BISHOP_SIZE],
    /// `bishop_magics[square]`.
    bishop_magics: [Magic; Square::TOTAL],
    /// `rook_magics[square]`.
    rook_magics: [Magic; Square::TOTAL],
}

/// The program's attack tables, evaluated entirely at compile time.
pub static LOOKUPS: Lookup = Lookup::new();

impl Lookup {
    /// Builds every lookup table. Evaluated once, at compile time.
    #[allow(clippy::large_stack_frames)]
    const fn new() -> Self {
        let pawn_attacks = Self::init_pawn_attacks();
        let knight_attacks = Self::init_knight_attacks();
        let king_attacks = Self::init_king_attacks();
        let (magic_table, bishop_magics, rook_magics) = Self::init_magics();

        Self {
            pawn_attacks,
            knight_attacks,
            king_attacks,
            magic_table,
            bishop_magics,
            rook_magics,
        }
    }

    const fn init_pawn_attacks() -> [[Bitboard; Square::TOTAL]; Side::TOTAL] {
        let mut pawn_attacks = [[Bitboard::empty(); Square::TOTAL]; Side::TOTAL];
        cfor!(let mut square = 0; square < Square::TOTAL; square += 1; {
            let pawn = bitboard_from_square(square as u8);
            let pushed_white = north(pawn);
            let pushed_black = south(pawn);
            pawn_attacks[Side::WHITE.to_index()][square] =
                Bitboard(east(pushed_white) | west(pushed_white));
            pawn_attacks[Side::BLACK.to_index()][square] =
                Bitboard(east(pushed_black) | west(pushed_black));
        });
        pawn_attacks
    }

    const fn init_knight_attacks() -> [Bitboard; Square::TOTAL] {
        let mut knight_attacks = [Bitboard::empty(); Square::TOTAL];
        cfor!(let mut square = 0; square < Square::TOTAL; square += 1; {
            let knight = bitboard_from_square(square as u8);
            let mut e = east(knight);
            let mut w = west(knight);
            let mut attacks = north(north(e | w));
            attacks |= south(south(e | w));

            e = east(e);
            w = west(w);
            attacks |= north(e | w);
            attacks |= south(e | w);

            knight_attacks[square] = Bitboard(attacks);
        });
        knight_attacks
    }

    const fn init_king_attacks() -> [Bitboard; Square::TOTAL] {
        let mut king_attacks = [Bitboard::empty(); Square::TOTAL];
        cfor!(let mut square = 0; square < Square::TOTAL; square += 1; {
            let king = bitboard_from_square(square as u8);

            let mut attacks = east(king) | west(king) | king;
            attacks |= north(attacks) | south(attacks);
            attacks ^= king;

            king_attacks[square] = Bitboard(attacks);
        });
        king_attacks
    }

    #[allow(clippy::large_stack_arrays, clippy::large_stack_frames)]
    const fn init_magics() -> (
        [Bitboard; ROOK_SIZE + BISHOP_SIZE],
        [Magic; Square::TOTAL],
        [Magic; Square::TOTAL],
    ) {
        let mut b_offset = ROOK_SIZE;
        let mut r_offset = 0;
        let mut magic_table = [Bitboard::empty(); ROOK_SIZE + BISHOP_SIZE];
        let mut bishop_magics = [Magic::null(); Square::TOTAL];
        let mut rook_magics = [Magic::null(); Square::TOTAL];

        cfor!(let mut square = 0; square < Square::TOTAL; square += 1; {
            let square = Square(square as u8);
            let edges = Bitboard::edges_without(square).0;
            let b_mask =
                sliding_attacks::<{ PieceType::BISHOP.0 }>(square, Bitboard::empty()).0 & !edges;
            let r_mask =
                sliding_attacks::<{ PieceType::ROOK.0 }>(square, Bitboard::empty()).0 & !edges;
            let b_mask_bits = b_mask.count_ones();
            let r_mask_bits = r_mask.count_ones();
            let b_perms = 2_usize.pow(b_mask_bits);
            let r_perms = 2_usize.pow(r_mask_bits);

            let b_magic = Magic::new(
                BISHOP_MAGICS[square.to_index()],
                Bitboard(b_mask),
                b_offset,
                64 - b_mask_bits,
            );
            bishop_magics[square.to_index()] = b_magic;
            let r_magic = Magic::new(
                ROOK_MAGICS[square.to_index()],
                Bitboard(r_mask),
                r_offset,
                64 - r_mask_bits,
            );
            rook_magics[square.to_index()] = r_magic;

            let mut blockers = b_mask;
            cfor!(let mut attack = 0; attack < b_perms; attack += 1; {
                let index = b_magic.get_table_index(Bitboard(blockers));
                magic_table[index] =
                    sliding_attacks::<{ PieceType::BISHOP.0 }>(square, Bitboard(blockers));
                blockers = blockers.wrapping_sub(1) & b_mask;
            });

            let mut blockers = r_mask;
            cfor!(let mut attack = 0; attack < r_perms; attack += 1; {
                let index = r_magic.get_table_index(Bitboard(blockers));
                magic_table[index] =
                    sliding_attacks::<{ PieceType::ROOK.0 }>(square, Bitboard(blockers));
                blockers = blockers.wrapping_sub(1) & r_mask;
            });

            b_offset += b_perms;
            r_offset += r_perms;
        });
        (magic_table, bishop_magics, rook_magics)
    }

    /// Finds the pawn attacks from `square` for `side`.
    pub fn pawn_attacks(&self, side: Side, square: Square) -> Bitboard {
        let side_table = get_unchecked(&self.pawn_attacks, side.to_index());
        *get_unchecked(side_table, square.to_index())
    }

    /// Finds the knight attacks from `square`.
    pub fn knight_attacks(&self, square: Square) -> Bitboard {
        *get_unchecked(&self.knight_attacks, square.to_index())
    }

    /// Finds the king attacks from `square`.
    pub fn king_attacks(&self, square: Square) -> Bitboard {
        *get_unchecked(&self.king_attacks, square.to_index())
    }

    /// Finds the bishop attacks from `square` with the given blockers.
    pub fn bishop_attacks(&self, square: Square, blockers: Bitboard) -> Bitboard {
        let index = get_unchecked(&self.bishop_magics, square.to_index()).get_table_index(blockers);
        *get_unchecked(&self.magic_table, index)
    }

    /// Finds the rook attacks from `square` with the given blockers.
    pub fn rook_attacks(&self, square: Square, blockers: Bitboard) -> Bitboard {
        let index = get_unchecked(&self.rook_magics, square.to_index()).get_table_index(blockers);
        *get_unchecked(&self.magic_table, index)
    }

    /// Finds the queen attacks from `square` with the given blockers.
    pub fn queen_attacks(&self, square: Square, blockers: Bitboard) -> Bitboard {
        self.bishop_attacks(square, blockers) | self.rook_attacks(square, blockers)
    }

    /// The rook x-ray attacks from `square`: attacks computed with the first
    /// own-colour blocker removed, XORed with the normal attacks, yielding
    /// the squares behind own blockers. Used for pin detection.
    pub fn rook_xray(&self, occupancies: Bitboard, own_occupancies: Bitboard, square: Square) -> Bitboard {
        let attacks = self.rook_attacks(square, occupancies);
        let behind = self.rook_attacks(occupancies ^ (attacks & own_occupancies), square);
        attacks ^ behind
    }

    /// The bishop x-ray attacks from `square`. See [`Lookup::rook_xray()`].
    pub fn bishop_xray(&self, occupancies: Bitboard, own_occupancies: Bitboard, square: Square) -> Bitboard {
        let attacks = self.bishop_attacks(square, occupancies);
        let behind = self.bishop_attacks(occupancies ^ (attacks & own_occupancies), square);
        attacks ^ behind
    }

    /// The squares strictly between `start` and `end`, if they lie on a
    /// shared rank, file or diagonal. Empty otherwise, and empty if the
    /// squares are equal or adjacent.
    pub fn ray_between(&self, start: Square, end: Square) -> Bitboard {
        let rook_from_start = self.rook_attacks(start, Bitboard::empty());
        if !(rook_from_start & Bitboard::from(end)).is_empty() {
            return rook_from_start & self.rook_attacks(end, Bitboard::empty());
        }
        let bishop_from_start = self.bishop_attacks(start, Bitboard::empty());
        if !(bishop_from_start & Bitboard::from(end)).is_empty() {
            return bishop_from_start & self.bishop_attacks(end, Bitboard::empty());
        }
        Bitboard::empty()
    }
}
