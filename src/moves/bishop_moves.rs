//! Bishop attack generation.
//!
//! Occupancy-aware diagonal ray tracing; shares the ray walker with the rook.

use crate::moves::rook_moves::trace_ray;

#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    let sq = square as i32;
    let mut attacks = 0u64;

    attacks |= trace_ray(sq, 1, 1, occupancy);
    attacks |= trace_ray(sq, -1, 1, occupancy);
    attacks |= trace_ray(sq, 1, -1, occupancy);
    attacks |= trace_ray(sq, -1, -1, occupancy);

    attacks
}
