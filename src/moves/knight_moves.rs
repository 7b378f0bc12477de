//! Knight attack table.
//!
//! Squares are indexed `row * 8 + col`; the table is symmetric so it serves
//! both players.

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let col = (sq % 8) as i32;
        let row = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row + 2, col + 1);
        attacks |= set_if_valid(row + 1, col + 2);
        attacks |= set_if_valid(row - 1, col + 2);
        attacks |= set_if_valid(row - 2, col + 1);
        attacks |= set_if_valid(row - 2, col - 1);
        attacks |= set_if_valid(row - 1, col - 2);
        attacks |= set_if_valid(row + 1, col - 2);
        attacks |= set_if_valid(row + 2, col - 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (col as usize);
    1u64 << square
}
