//! Derived game-end flags and material advantage.
//!
//! Both values are pure functions of the current board contents, counters
//! and legal move set. The board recomputes them from scratch at the end of
//! every construction, apply and undo, so nothing here is ever carried across
//! a mutation.

use crate::game_state::chess_rules::DRAW_COUNTER_LIMIT;
use crate::game_state::chess_types::{ChessPiece, Player};

/// Check / checkmate / stalemate / draw flags of a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStatus {
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_draw: bool,
}

impl GameStatus {
    /// Derive the flags from whether the side to move is attacked, whether it
    /// has any legal move and the current draw counter.
    pub fn evaluate(king_attacked: bool, has_legal_moves: bool, draw_counter: u16) -> Self {
        let is_draw = draw_counter >= DRAW_COUNTER_LIMIT;
        Self {
            is_check: king_attacked,
            is_checkmate: king_attacked && !has_legal_moves,
            is_stalemate: !king_attacked && !has_legal_moves && !is_draw,
            is_draw,
        }
    }

    #[inline]
    pub const fn is_finished(&self) -> bool {
        self.is_checkmate || self.is_stalemate || self.is_draw
    }
}

/// Material advantage: which player leads and by how much.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advantage {
    /// `None` on a tie.
    pub leader: Option<Player>,
    pub magnitude: u32,
}

impl Advantage {
    /// Sum the material of every occupied cell, player one positive.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Option<ChessPiece>>) -> Self {
        let signed: i64 = cells
            .into_iter()
            .flatten()
            .map(|piece| {
                let value = piece.kind.value() as i64;
                match piece.player {
                    Player::One => value,
                    Player::Two => -value,
                }
            })
            .sum();

        let leader = match signed {
            0 => None,
            v if v > 0 => Some(Player::One),
            _ => Some(Player::Two),
        };
        Self {
            leader,
            magnitude: signed.unsigned_abs() as u32,
        }
    }

    /// Leading player id, 0 on a tie.
    #[inline]
    pub fn player_id(&self) -> u8 {
        self.leader.map_or(0, Player::id)
    }
}
