//! Core value types of the board model.
//!
//! Players, piece kinds, the (kind, owner) piece pair stored in each board
//! cell, and the compact castling-rights bitmask.

use std::fmt;

use crate::game_state::chess_rules::*;

/// Side to move. Player one starts on rows 6-7 and moves toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Numeric player id (1 or 2).
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    #[inline]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Player::One => PLAYER_ONE_BACK_ROW,
            Player::Two => PLAYER_TWO_BACK_ROW,
        }
    }

    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Player::One => PLAYER_ONE_PAWN_ROW,
            Player::Two => PLAYER_TWO_PAWN_ROW,
        }
    }

    /// Row on which this player's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opponent().back_row()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.id())
    }
}

/// Piece kind (owner is carried separately in `ChessPiece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value used by the advantage calculator.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Lowercase letter used by move and board text output.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Contents of an occupied board cell. Empty cells are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPiece {
    pub kind: PieceKind,
    pub player: Player,
}

impl ChessPiece {
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Self { kind, player }
    }

    #[inline]
    pub fn is(self, kind: PieceKind, player: Player) -> bool {
        self.kind == kind && self.player == player
    }
}

/// Which side of the board a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::KingSide => KINGSIDE_ROOK_HOME_COL,
            CastleSide::QueenSide => QUEENSIDE_ROOK_HOME_COL,
        }
    }

    #[inline]
    pub const fn rook_castled_col(self) -> u8 {
        match self {
            CastleSide::KingSide => KINGSIDE_ROOK_CASTLED_COL,
            CastleSide::QueenSide => QUEENSIDE_ROOK_CASTLED_COL,
        }
    }

    #[inline]
    pub const fn king_castled_col(self) -> u8 {
        match self {
            CastleSide::KingSide => KINGSIDE_KING_CASTLED_COL,
            CastleSide::QueenSide => QUEENSIDE_KING_CASTLED_COL,
        }
    }

    /// Side whose rook starts in `col`, if any.
    #[inline]
    pub const fn from_rook_home_col(col: u8) -> Option<Self> {
        match col {
            KINGSIDE_ROOK_HOME_COL => Some(CastleSide::KingSide),
            QUEENSIDE_ROOK_HOME_COL => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// Compact castling rights bitmask, one bit per (player, side).
pub type CastlingRights = u8;

pub const CASTLE_PLAYER_ONE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_PLAYER_ONE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_PLAYER_TWO_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_PLAYER_TWO_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = CASTLE_PLAYER_ONE_KINGSIDE
    | CASTLE_PLAYER_ONE_QUEENSIDE
    | CASTLE_PLAYER_TWO_KINGSIDE
    | CASTLE_PLAYER_TWO_QUEENSIDE;

#[inline]
pub const fn castle_flag(player: Player, side: CastleSide) -> CastlingRights {
    match (player, side) {
        (Player::One, CastleSide::KingSide) => CASTLE_PLAYER_ONE_KINGSIDE,
        (Player::One, CastleSide::QueenSide) => CASTLE_PLAYER_ONE_QUEENSIDE,
        (Player::Two, CastleSide::KingSide) => CASTLE_PLAYER_TWO_KINGSIDE,
        (Player::Two, CastleSide::QueenSide) => CASTLE_PLAYER_TWO_QUEENSIDE,
    }
}

/// Both castling bits of `player`.
#[inline]
pub const fn castle_flags_for(player: Player) -> CastlingRights {
    castle_flag(player, CastleSide::KingSide) | castle_flag(player, CastleSide::QueenSide)
}

/// Board square index (`0..=63`, `row * 8 + col`).
pub type Square = u8;
