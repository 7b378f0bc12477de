//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board construction,
//! move application, undo and the square-name helpers. Every failing
//! operation is rejected before any mutation takes place, so callers can
//! match on the variant and keep using the board.

use std::error::Error;
use std::fmt;

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_move::ChessMove;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// `undo_last_move` was called on a board with an empty history.
    NoMoveToUndo,

    /// The move is not a member of the current legal move set.
    ///
    /// Payload: the rejected move.
    IllegalMove(ChessMove),

    /// Row or column outside `0..=7` was supplied to a position constructor.
    InvalidBoardPosition { row: i32, col: i32 },

    /// A square name (for example `"e4"`) failed to parse.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// A scenario placement list was rejected (duplicate square, second king
    /// for one player, ...).
    ///
    /// Payload: human readable reason.
    InvalidPlacement(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::NoMoveToUndo => write!(f, "there is no move to undo"),
            ChessErrors::IllegalMove(mv) => write!(f, "illegal move: {mv}"),
            ChessErrors::InvalidBoardPosition { row, col } => {
                write!(f, "position ({row}, {col}) is outside the 8x8 board")
            }
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid square name: {s:?}"),
            ChessErrors::InvalidPlacement(reason) => write!(f, "invalid placement: {reason}"),
        }
    }
}

impl Error for ChessErrors {}

/// Convenience alias for results produced by the rules engine.
pub type ChessResult<T> = Result<T, ChessErrors>;

impl From<(BoardPosition, &'static str)> for ChessErrors {
    fn from((position, reason): (BoardPosition, &'static str)) -> Self {
        ChessErrors::InvalidPlacement(format!("{position}: {reason}"))
    }
}
