//! Terminal-oriented Unicode board renderer.
//!
//! Draws the cells with rank 8 (row 0) at the top, for logs, tests and the
//! report binary.

use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::*;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &ChessBoard) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match board.piece_at(BoardPosition::from_row_col(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);

    out
}

fn piece_to_unicode(piece: ChessPiece) -> char {
    match (piece.player, piece.kind) {
        (Player::One, PieceKind::Pawn) => '♙',
        (Player::One, PieceKind::Knight) => '♘',
        (Player::One, PieceKind::Bishop) => '♗',
        (Player::One, PieceKind::Rook) => '♖',
        (Player::One, PieceKind::Queen) => '♕',
        (Player::One, PieceKind::King) => '♔',
        (Player::Two, PieceKind::Pawn) => '♟',
        (Player::Two, PieceKind::Knight) => '♞',
        (Player::Two, PieceKind::Bishop) => '♝',
        (Player::Two, PieceKind::Rook) => '♜',
        (Player::Two, PieceKind::Queen) => '♛',
        (Player::Two, PieceKind::King) => '♚',
    }
}
