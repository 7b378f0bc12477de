//! In-place move execution and exact reversal.
//!
//! `make_move` mutates the board and returns the minimal delta needed to put
//! it back; `unmake_move` consumes that delta. Both the public commands and
//! the legality filter go through this pair. Neither touches derived state.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::{ChessMove, ChessMoveType};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;

/// Apply `chess_move` to the cells and counters.
///
/// Returns `None` without mutating anything when the start square is empty.
pub(crate) fn make_move(board: &mut ChessBoard, chess_move: ChessMove) -> Option<UndoState> {
    let moved_piece = board.take_piece(chess_move.start)?;
    let player = moved_piece.player;

    let prev_castling_rights = board.castling_rights;
    let prev_en_passant_target = board.en_passant_target;
    let prev_draw_counter = board.draw_counter;

    // En passant takes the pawn beside the start square, not on the target.
    let capture_position = match chess_move.move_type {
        ChessMoveType::EnPassant => {
            BoardPosition::from_row_col(chess_move.start.row(), chess_move.end.col())
        }
        _ => chess_move.end,
    };
    let captured = board
        .take_piece(capture_position)
        .map(|piece| (capture_position, piece));

    let placed = match (chess_move.move_type, chess_move.promotion) {
        (ChessMoveType::PawnPromote, Some(kind)) => ChessPiece::new(kind, player),
        _ => moved_piece,
    };
    board.put_piece(chess_move.end, placed);

    if let Some(side) = chess_move.move_type.castle_side() {
        let row = chess_move.start.row();
        move_rook(
            board,
            BoardPosition::from_row_col(row, side.rook_home_col()),
            BoardPosition::from_row_col(row, side.rook_castled_col()),
        );
    }

    update_castling_rights(board, chess_move, moved_piece, captured);

    board.en_passant_target = double_push_skipped_square(chess_move, moved_piece);

    board.draw_counter = if captured.is_some() || moved_piece.kind == PieceKind::Pawn {
        0
    } else {
        prev_draw_counter.saturating_add(1)
    };

    board.current_player = player.opponent();

    Some(UndoState {
        chess_move,
        moved_piece,
        captured,
        prev_castling_rights,
        prev_en_passant_target,
        prev_draw_counter,
    })
}

/// Reverse a `make_move` using its record.
pub(crate) fn unmake_move(board: &mut ChessBoard, undo: &UndoState) {
    let chess_move = undo.chess_move;

    board.take_piece(chess_move.end);

    if let Some(side) = chess_move.move_type.castle_side() {
        let row = chess_move.start.row();
        move_rook(
            board,
            BoardPosition::from_row_col(row, side.rook_castled_col()),
            BoardPosition::from_row_col(row, side.rook_home_col()),
        );
    }

    board.put_piece(chess_move.start, undo.moved_piece);
    if let Some((position, piece)) = undo.captured {
        board.put_piece(position, piece);
    }

    board.castling_rights = undo.prev_castling_rights;
    board.en_passant_target = undo.prev_en_passant_target;
    board.draw_counter = undo.prev_draw_counter;
    board.current_player = undo.moved_piece.player;
}

#[inline]
fn move_rook(board: &mut ChessBoard, from: BoardPosition, to: BoardPosition) {
    if let Some(rook) = board.take_piece(from) {
        board.put_piece(to, rook);
    }
}

fn update_castling_rights(
    board: &mut ChessBoard,
    chess_move: ChessMove,
    moved_piece: ChessPiece,
    captured: Option<(BoardPosition, ChessPiece)>,
) {
    let player = moved_piece.player;
    match moved_piece.kind {
        PieceKind::King => board.castling_rights &= !castle_flags_for(player),
        PieceKind::Rook => {
            if let Some(side) = home_corner_side(chess_move.start, player) {
                board.castling_rights &= !castle_flag(player, side);
            }
        }
        _ => {}
    }

    if let Some((position, piece)) = captured {
        if piece.kind == PieceKind::Rook {
            if let Some(side) = home_corner_side(position, piece.player) {
                board.castling_rights &= !castle_flag(piece.player, side);
            }
        }
    }
}

/// Castle side whose rook starts on `position` for `player`, if any.
#[inline]
fn home_corner_side(position: BoardPosition, player: Player) -> Option<CastleSide> {
    if position.row() != player.back_row() {
        return None;
    }
    CastleSide::from_rook_home_col(position.col())
}

#[inline]
fn double_push_skipped_square(chess_move: ChessMove, moved_piece: ChessPiece) -> Option<BoardPosition> {
    if moved_piece.kind != PieceKind::Pawn {
        return None;
    }
    let (start, end) = (chess_move.start, chess_move.end);
    if start.row().abs_diff(end.row()) != 2 {
        return None;
    }
    Some(BoardPosition::from_row_col((start.row() + end.row()) / 2, start.col()))
}
