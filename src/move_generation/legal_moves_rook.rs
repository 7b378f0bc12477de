use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(board: &ChessBoard, out: &mut Vec<ChessMove>) {
    generate_piece_moves(board, PieceKind::Rook, rook_attacks, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::chess_board::ChessBoard;
    use crate::game_state::chess_types::{ChessPiece, PieceKind, Player};

    fn pos(name: &str) -> BoardPosition {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn open_rook_reaches_fourteen_squares() {
        let board = ChessBoard::from_positions([
            (pos("d4"), ChessPiece::new(PieceKind::Rook, Player::One)),
            (pos("a1"), ChessPiece::new(PieceKind::King, Player::One)),
            (pos("h8"), ChessPiece::new(PieceKind::King, Player::Two)),
        ])
        .expect("scenario should build");

        let mut out = Vec::new();
        generate_rook_moves(&board, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn opening_rooks_are_boxed_in() {
        let mut out = Vec::new();
        generate_rook_moves(&ChessBoard::new(), &mut out);
        assert!(out.is_empty());
    }
}
