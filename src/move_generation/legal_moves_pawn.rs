use crate::game_state::board_position::{positions_in_mask, BoardPosition};
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::{ChessMove, ChessMoveType};
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(board: &ChessBoard, out: &mut Vec<ChessMove>) {
    let side = board.current_player;
    let enemy_occ = board.occupancy(side.opponent());
    let forward = side.forward();

    for from in positions_in_mask(board.pieces_mask(PieceKind::Pawn, side)) {
        if let Some(one_step) = from.offset(forward, 0) {
            if board.position_is_empty(one_step) {
                push_pawn_move(side, from, one_step, out);

                if from.row() == side.pawn_row() {
                    if let Some(two_step) = from.offset(2 * forward, 0) {
                        if board.position_is_empty(two_step) {
                            out.push(ChessMove::normal(from, two_step));
                        }
                    }
                }
            }
        }

        let attacks = pawn_attacks(side, from.square());
        for to in positions_in_mask(attacks & enemy_occ) {
            push_pawn_move(side, from, to, out);
        }

        if let Some(target) = board.en_passant_target {
            if attacks & target.mask() != 0 && en_passant_available(board, from, target) {
                out.push(ChessMove::new(from, target, ChessMoveType::EnPassant));
            }
        }
    }
}

/// Push a pawn move, expanded into the four promotions on the far rank.
#[inline]
fn push_pawn_move(side: Player, from: BoardPosition, to: BoardPosition, out: &mut Vec<ChessMove>) {
    if to.row() == side.promotion_row() {
        out.extend(PROMOTION_KINDS.iter().map(|&kind| ChessMove::promote(from, to, kind)));
    } else {
        out.push(ChessMove::normal(from, to));
    }
}

#[inline]
fn en_passant_available(board: &ChessBoard, from: BoardPosition, target: BoardPosition) -> bool {
    let side = board.current_player;
    let victim = BoardPosition::from_row_col(from.row(), target.col());
    board.position_is_empty(target) && board.piece_is(victim, PieceKind::Pawn, side.opponent())
}
