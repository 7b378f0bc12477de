use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: u8, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}
