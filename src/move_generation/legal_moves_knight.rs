use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_move_shared::generate_piece_moves;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(board: &ChessBoard, out: &mut Vec<ChessMove>) {
    generate_piece_moves(board, PieceKind::Knight, |square, _| knight_attacks(square), out);
}
