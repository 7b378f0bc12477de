//! Move identity.
//!
//! A move is identified by its start and end positions, its kind and, for
//! promotions, the piece the pawn becomes. Castling moves are expressed by the
//! king's start and destination; the rook relocation is implied by the kind.

use std::fmt;

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::{CastleSide, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChessMoveType {
    /// Used for moving and capturing.
    Normal,
    CastleKingSide,
    CastleQueenSide,
    /// Diagonal pawn capture onto the en-passant target.
    EnPassant,
    /// Pawn move onto the far rank; `ChessMove::promotion` holds the new kind.
    PawnPromote,
}

impl ChessMoveType {
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            ChessMoveType::CastleKingSide => Some(CastleSide::KingSide),
            ChessMoveType::CastleQueenSide => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

impl From<CastleSide> for ChessMoveType {
    fn from(side: CastleSide) -> Self {
        match side {
            CastleSide::KingSide => ChessMoveType::CastleKingSide,
            CastleSide::QueenSide => ChessMoveType::CastleQueenSide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub start: BoardPosition,
    pub end: BoardPosition,
    pub move_type: ChessMoveType,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(start: BoardPosition, end: BoardPosition, move_type: ChessMoveType) -> Self {
        Self {
            start,
            end,
            move_type,
            promotion: None,
        }
    }

    #[inline]
    pub const fn normal(start: BoardPosition, end: BoardPosition) -> Self {
        Self::new(start, end, ChessMoveType::Normal)
    }

    #[inline]
    pub const fn promote(start: BoardPosition, end: BoardPosition, kind: PieceKind) -> Self {
        Self {
            start,
            end,
            move_type: ChessMoveType::PawnPromote,
            promotion: Some(kind),
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.move_type.castle_side().is_some()
    }
}

/// Coordinate form, e.g. `e2e4` or `e7e8q`. Diagnostic output only.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
