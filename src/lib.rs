//! Crate root module declarations for the Plum board rules engine.
//!
//! This file exposes the board model (pieces, positions, moves, undo records
//! and derived game status), the attack tables, the legal move pipeline and
//! the utility helpers so binaries, tests, and external front ends can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_position;
    pub mod chess_board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_status;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement;
    pub mod random_playout;
    pub mod render_board;
}

pub use errors::ChessErrors;
pub use game_state::board_position::BoardPosition;
pub use game_state::chess_board::ChessBoard;
pub use game_state::chess_move::{ChessMove, ChessMoveType};
pub use game_state::chess_types::{CastleSide, ChessPiece, PieceKind, Player};
pub use game_state::game_status::{Advantage, GameStatus};
pub use game_state::undo_state::UndoState;
