//! Perft: exhaustive legal-move tree counts.
//!
//! Walks the tree through the public `apply_move` / `undo_last_move` pair, so
//! the counts cover generation, execution, reversal and status evaluation
//! together. The board is returned to its starting state.

use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::{ChessMove, ChessMoveType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    /// Tally the leaf reached by the most recent move on `board`.
    fn record_leaf(&mut self, board: &ChessBoard) {
        self.nodes += 1;
        let Some(last) = board.move_history().last() else {
            return;
        };

        if last.captured.is_some() {
            self.captures += 1;
        }
        match last.chess_move.move_type {
            ChessMoveType::EnPassant => self.en_passant += 1,
            ChessMoveType::CastleKingSide | ChessMoveType::CastleQueenSide => self.castles += 1,
            ChessMoveType::PawnPromote => self.promotions += 1,
            ChessMoveType::Normal => {}
        }
        if board.is_check() {
            self.checks += 1;
        }
        if board.is_checkmate() {
            self.checkmates += 1;
        }
    }
}

pub fn perft(board: &mut ChessBoard, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (_, counts) in perft_divide(board, depth)? {
        total.merge(counts);
    }
    Ok(total)
}

/// Per-root-move breakdown, in generation order.
pub fn perft_divide(
    board: &mut ChessBoard,
    depth: u8,
) -> ChessResult<Vec<(ChessMove, PerftCounts)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let root_moves = board.possible_moves().to_vec();
    let mut divide = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        board.apply_move(mv)?;
        let mut counts = PerftCounts::default();
        if depth == 1 {
            counts.record_leaf(board);
        } else {
            perft_recurse(board, depth - 1, &mut counts)?;
        }
        board.undo_last_move()?;

        debug!(chess_move = %mv, nodes = counts.nodes, "perft divide");
        divide.push((mv, counts));
    }
    Ok(divide)
}

fn perft_recurse(board: &mut ChessBoard, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    let moves = board.possible_moves().to_vec();
    for mv in moves {
        board.apply_move(mv)?;
        if depth == 1 {
            counts.record_leaf(board);
        } else {
            perft_recurse(board, depth - 1, counts)?;
        }
        board.undo_last_move()?;
    }
    Ok(())
}
