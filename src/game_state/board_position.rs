//! Board coordinates.
//!
//! `BoardPosition` is a checked `(row, col)` pair. Row 0 is player two's back
//! rank (algebraic rank 8) and column 0 is file `a`, so `e2` is `(6, 4)`.
//! Positions can only be built through the checked constructor or from
//! internal square indices, so every value is on the board.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardPosition {
    row: u8,
    col: u8,
}

impl BoardPosition {
    /// Checked constructor. Fails with `InvalidBoardPosition` outside `0..=7`.
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessErrors::InvalidBoardPosition { row, col })
        }
    }

    /// Position of an internal square index. `square` must be below 64.
    #[inline]
    pub(crate) const fn from_square(square: Square) -> Self {
        debug_assert!(square < 64);
        Self {
            row: square / 8,
            col: square % 8,
        }
    }

    #[inline]
    pub(crate) const fn from_row_col(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn square(self) -> Square {
        self.row * 8 + self.col
    }

    /// One-hot bitboard of this position.
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.square()
    }

    /// The position `d_row` rows and `d_col` columns away, if still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::from_row_col(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 positions in square order.
    pub fn all() -> impl Iterator<Item = BoardPosition> {
        (0..64u8).map(Self::from_square)
    }
}

/// Iterate the positions of the set bits of `mask`, lowest square first.
pub fn positions_in_mask(mut mask: u64) -> impl Iterator<Item = BoardPosition> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let square = mask.trailing_zeros() as Square;
        mask &= mask - 1;
        Some(BoardPosition::from_square(square))
    })
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&position_to_algebraic(*self))
    }
}

impl FromStr for BoardPosition {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_position(s)
    }
}
