//! Helpers shared by the per-piece generators.

use crate::game_state::board_position::{positions_in_mask, BoardPosition};
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;

/// Push a `Normal` move from `from` to every set bit of `targets`.
#[inline]
pub fn push_targets(from: BoardPosition, targets: u64, out: &mut Vec<ChessMove>) {
    out.extend(positions_in_mask(targets).map(|to| ChessMove::normal(from, to)));
}

/// Generate `Normal` moves for every `kind` piece of the side to move.
///
/// `attacks` maps a square and the full occupancy to the reachable squares;
/// squares held by the mover's own pieces are removed here, so sliding rays
/// keep an enemy blocker and drop a friendly one.
pub fn generate_piece_moves<F>(board: &ChessBoard, kind: PieceKind, attacks: F, out: &mut Vec<ChessMove>)
where
    F: Fn(Square, u64) -> u64,
{
    let side = board.current_player;
    let own_occ = board.occupancy(side);
    let all_occ = board.occupancy_all();

    for from in positions_in_mask(board.pieces_mask(kind, side)) {
        let targets = attacks(from.square(), all_occ) & !own_occ;
        push_targets(from, targets, out);
    }
}
