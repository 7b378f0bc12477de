//! Full legal move generation pipeline.
//!
//! Collects piece-wise pseudo-legal candidates, then plays each one on the
//! board, drops it when the mover's king is left attacked, and takes it back.

use tracing::trace;

use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::ChessMove;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Candidates for the side to move, before self-check filtering.
pub fn generate_pseudo_legal_moves(board: &ChessBoard) -> Vec<ChessMove> {
    let mut pseudo = Vec::<ChessMove>::with_capacity(64);

    generate_pawn_moves(board, &mut pseudo);
    generate_knight_moves(board, &mut pseudo);
    generate_bishop_moves(board, &mut pseudo);
    generate_rook_moves(board, &mut pseudo);
    generate_queen_moves(board, &mut pseudo);
    generate_king_moves(board, &mut pseudo);

    pseudo
}

/// Legal moves for the side to move. The board is returned to its exact
/// prior state.
pub fn generate_legal_moves(board: &mut ChessBoard) -> Vec<ChessMove> {
    let mover = board.current_player;
    let mut moves = generate_pseudo_legal_moves(board);

    moves.retain(|&mv| {
        let Some(undo) = make_move(board, mv) else {
            return false;
        };
        let exposes_king = is_king_in_check(board, mover);
        unmake_move(board, &undo);

        if exposes_king {
            trace!(chess_move = %mv, "pruned move leaving king attacked");
        }
        !exposes_king
    });

    moves
}
