//! King attack table.
//!
//! Precomputed neighbour masks used both for king move generation and for
//! attacked-square tests. Castling is handled by the legal generator.

use crate::moves::knight_moves::set_if_valid;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row - 1, col - 1);
        attacks |= set_if_valid(row - 1, col);
        attacks |= set_if_valid(row - 1, col + 1);
        attacks |= set_if_valid(row, col - 1);
        attacks |= set_if_valid(row, col + 1);
        attacks |= set_if_valid(row + 1, col - 1);
        attacks |= set_if_valid(row + 1, col);
        attacks |= set_if_valid(row + 1, col + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}
