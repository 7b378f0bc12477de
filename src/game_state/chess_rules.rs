//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard back-rank layout, home rows, castling
//! geometry, material values and the draw-counter limit used by the board
//! model and the derived status evaluator.

use crate::game_state::chess_types::PieceKind;

/// Half-moves without a capture or pawn move after which the game is drawn.
pub const DRAW_COUNTER_LIMIT: u16 = 100;

/// Back-rank pieces from column 0 (file a) to column 7 (file h).
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a pawn may promote to, in the order promotion moves are generated.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

// Rows are counted from player 2's back rank (row 0 == rank 8).
pub const PLAYER_ONE_BACK_ROW: u8 = 7;
pub const PLAYER_ONE_PAWN_ROW: u8 = 6;
pub const PLAYER_TWO_BACK_ROW: u8 = 0;
pub const PLAYER_TWO_PAWN_ROW: u8 = 1;

pub const KING_HOME_COL: u8 = 4;

pub const KINGSIDE_ROOK_HOME_COL: u8 = 7;
pub const KINGSIDE_ROOK_CASTLED_COL: u8 = 5;
pub const KINGSIDE_KING_CASTLED_COL: u8 = 6;

pub const QUEENSIDE_ROOK_HOME_COL: u8 = 0;
pub const QUEENSIDE_ROOK_CASTLED_COL: u8 = 3;
pub const QUEENSIDE_KING_CASTLED_COL: u8 = 2;

pub const PAWN_VALUE: u32 = 1;
pub const KNIGHT_VALUE: u32 = 3;
pub const BISHOP_VALUE: u32 = 3;
pub const ROOK_VALUE: u32 = 5;
pub const QUEEN_VALUE: u32 = 9;
pub const KING_VALUE: u32 = 0;
