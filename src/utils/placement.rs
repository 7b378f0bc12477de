//! Piece-placement text parser.
//!
//! Reads the piece-placement field of a FEN record (for example
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`) into a placement list for
//! `ChessBoard::from_positions`. Ranks run from rank 8 (row 0) down to rank 1;
//! uppercase letters are player one. The remaining FEN fields are not read.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board_position::BoardPosition;
use crate::game_state::chess_types::*;

pub fn parse_placement(layout: &str) -> ChessResult<Vec<(BoardPosition, ChessPiece)>> {
    let ranks: Vec<&str> = layout.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidPlacement(format!(
            "layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut placements = Vec::with_capacity(32);
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0i32;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as i32;
                continue;
            }

            let piece = piece_from_char(ch).ok_or_else(|| {
                ChessErrors::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;
            let position = BoardPosition::new(row as i32, col).map_err(|_| {
                ChessErrors::InvalidPlacement(format!("rank {} has too many files", 8 - row))
            })?;
            placements.push((position, piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidPlacement(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(placements)
}

fn piece_from_char(ch: char) -> Option<ChessPiece> {
    let player = if ch.is_ascii_uppercase() {
        Player::One
    } else {
        Player::Two
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(ChessPiece::new(kind, player))
}
