use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_position_attacked, king_position};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(board: &ChessBoard, out: &mut Vec<ChessMove>) {
    let side = board.current_player;
    let Some(from) = king_position(board, side) else {
        return;
    };

    push_targets(from, king_attacks(from.square()) & !board.occupancy(side), out);
    generate_castling_moves(board, from, out);
}

fn generate_castling_moves(board: &ChessBoard, king_from: BoardPosition, out: &mut Vec<ChessMove>) {
    let side = board.current_player;
    let enemy = side.opponent();
    let row = side.back_row();

    if board.castling_rights & castle_flags_for(side) == 0
        || king_from != BoardPosition::from_row_col(row, KING_HOME_COL)
    {
        return;
    }

    // Cannot castle out of check.
    if is_position_attacked(board, king_from, enemy) {
        return;
    }

    for castle_side in CastleSide::BOTH {
        if board.castling_rights & castle_flag(side, castle_side) == 0 {
            continue;
        }

        let rook_home = BoardPosition::from_row_col(row, castle_side.rook_home_col());
        if !board.piece_is(rook_home, PieceKind::Rook, side) {
            continue;
        }

        let (low, high) = if castle_side.rook_home_col() < KING_HOME_COL {
            (castle_side.rook_home_col() + 1, KING_HOME_COL)
        } else {
            (KING_HOME_COL + 1, castle_side.rook_home_col())
        };
        let path_clear = (low..high)
            .all(|col| board.position_is_empty(BoardPosition::from_row_col(row, col)));
        if !path_clear {
            continue;
        }

        // Pass-through and destination squares lie between the king and its
        // castled column.
        let king_to = BoardPosition::from_row_col(row, castle_side.king_castled_col());
        let pass = BoardPosition::from_row_col(row, castle_side.rook_castled_col());
        if is_position_attacked(board, pass, enemy) || is_position_attacked(board, king_to, enemy) {
            continue;
        }

        out.push(ChessMove::new(king_from, king_to, castle_side.into()));
    }
}
