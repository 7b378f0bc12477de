use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(board: &ChessBoard, out: &mut Vec<ChessMove>) {
    generate_piece_moves(board, PieceKind::Bishop, bishop_attacks, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::chess_board::ChessBoard;
    use crate::game_state::chess_types::{ChessPiece, PieceKind, Player};

    fn pos(name: &str) -> BoardPosition {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn stops_before_friend_and_on_enemy() {
        let board = ChessBoard::from_positions([
            (pos("c1"), ChessPiece::new(PieceKind::Bishop, Player::One)),
            (pos("e3"), ChessPiece::new(PieceKind::Pawn, Player::One)),
            (pos("a3"), ChessPiece::new(PieceKind::Pawn, Player::Two)),
            (pos("h1"), ChessPiece::new(PieceKind::King, Player::One)),
            (pos("h8"), ChessPiece::new(PieceKind::King, Player::Two)),
        ])
        .expect("scenario should build");

        let mut out = Vec::new();
        generate_bishop_moves(&board, &mut out);
        let mut names: Vec<String> = out.iter().map(|mv| mv.end.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["a3", "b2", "d2"]);
    }
}
