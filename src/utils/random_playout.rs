//! Random legal-move playouts.
//!
//! Drives a board forward with uniformly chosen legal moves. Used to reach
//! arbitrary mid-game positions in tests, benchmarks and the report binary.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::chess_board::ChessBoard;

/// Apply up to `max_moves` random legal moves, stopping early once the game
/// is finished. Returns the number of moves applied.
pub fn random_playout<R: Rng + ?Sized>(
    board: &mut ChessBoard,
    max_moves: usize,
    rng: &mut R,
) -> ChessResult<usize> {
    let mut applied = 0;
    while applied < max_moves {
        let Some(&mv) = board.possible_moves().choose(&mut *rng) else {
            break;
        };
        board.apply_move(mv)?;
        applied += 1;
    }

    debug!(
        applied,
        finished = board.is_finished(),
        draw_counter = board.draw_counter(),
        "random playout done"
    );
    Ok(applied)
}

/// Undo every move in the history, returning how many were undone.
pub fn unwind(board: &mut ChessBoard) -> ChessResult<usize> {
    let mut undone = 0;
    while !board.move_history().is_empty() {
        board.undo_last_move()?;
        undone += 1;
    }
    Ok(undone)
}
