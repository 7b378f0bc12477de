//! Rook attack generation.
//!
//! Occupancy-aware ray tracing along rows and columns. Each ray includes the
//! first occupied square it reaches, whoever owns it, and stops there.

#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    let sq = square as i32;
    let mut attacks = 0u64;

    attacks |= trace_ray(sq, 0, 1, occupancy);
    attacks |= trace_ray(sq, 0, -1, occupancy);
    attacks |= trace_ray(sq, 1, 0, occupancy);
    attacks |= trace_ray(sq, -1, 0, occupancy);

    attacks
}

pub(crate) fn trace_ray(square: i32, row_step: i32, col_step: i32, occupancy: u64) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut col = (square % 8) + col_step;
    let mut attacks = 0u64;

    while (0..8).contains(&row) && (0..8).contains(&col) {
        let target = (row * 8 + col) as usize;
        let bit = 1u64 << target;
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += row_step;
        col += col_step;
    }

    attacks
}
