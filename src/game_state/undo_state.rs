use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{CastlingRights, ChessPiece};

/// Single history / undo record for `apply_move` / `undo_last_move`.
///
/// Holds the minimal delta needed to invert the move exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub chess_move: ChessMove,
    /// Piece that stood on the start square (the pawn, for promotions).
    pub moved_piece: ChessPiece,
    /// Captured piece and the square it was taken from (differs from the
    /// destination for en passant).
    pub captured: Option<(BoardPosition, ChessPiece)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<BoardPosition>,
    pub prev_draw_counter: u16,
}

impl UndoState {
    #[inline]
    pub fn captured_piece(&self) -> Option<ChessPiece> {
        self.captured.map(|(_, piece)| piece)
    }
}
