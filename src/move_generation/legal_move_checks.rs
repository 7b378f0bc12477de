//! Attack queries and king-safety checks.
//!
//! Attack sets use movement shapes only, without self-check filtering. Sliding
//! rays stop on and include the first occupied square whoever owns it, and
//! pawns contribute their two capture diagonals only.

use crate::game_state::board_position::{positions_in_mask, BoardPosition};
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_position(board: &ChessBoard, player: Player) -> Option<BoardPosition> {
    positions_in_mask(board.pieces_mask(PieceKind::King, player)).next()
}

/// Squares threatened by `piece` standing on `position`.
pub fn attacks_from(board: &ChessBoard, position: BoardPosition, piece: ChessPiece) -> u64 {
    let square = position.square();
    let occupancy = board.occupancy_all();
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.player, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}

/// Union of every square threatened by `player`.
pub fn attacked_mask(board: &ChessBoard, player: Player) -> u64 {
    positions_in_mask(board.occupancy(player))
        .filter_map(|position| board.piece_at(position).map(|piece| (position, piece)))
        .fold(0u64, |acc, (position, piece)| acc | attacks_from(board, position, piece))
}

/// Per-kind bitboards of `player`'s pieces, indexed by `PieceKind::index`.
fn kind_masks(board: &ChessBoard, player: Player) -> [u64; 6] {
    let mut masks = [0u64; 6];
    for position in positions_in_mask(board.occupancy(player)) {
        if let Some(piece) = board.piece_at(position) {
            masks[piece.kind.index()] |= position.mask();
        }
    }
    masks
}

/// Reverse lookup: trace each movement shape outward from `position` and see
/// whether it lands on a matching attacker.
pub fn is_position_attacked(board: &ChessBoard, position: BoardPosition, by: Player) -> bool {
    let square = position.square();
    let occupancy = board.occupancy_all();
    let masks = kind_masks(board, by);

    // A pawn of `by` attacks `square` when a defender pawn on `square` would
    // attack the pawn's own square.
    if pawn_attacks(by.opponent(), square) & masks[PieceKind::Pawn.index()] != 0 {
        return true;
    }
    if knight_attacks(square) & masks[PieceKind::Knight.index()] != 0 {
        return true;
    }
    if king_attacks(square) & masks[PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = masks[PieceKind::Queen.index()];
    if bishop_attacks(square, occupancy) & (masks[PieceKind::Bishop.index()] | queens) != 0 {
        return true;
    }
    rook_attacks(square, occupancy) & (masks[PieceKind::Rook.index()] | queens) != 0
}

/// Every piece of `by` that attacks `position`, in square order.
pub fn attackers_of(
    board: &ChessBoard,
    position: BoardPosition,
    by: Player,
) -> Vec<(BoardPosition, ChessPiece)> {
    positions_in_mask(board.occupancy(by))
        .filter_map(|from| board.piece_at(from).map(|piece| (from, piece)))
        .filter(|&(from, piece)| attacks_from(board, from, piece) & position.mask() != 0)
        .collect()
}

/// True when `player`'s king is attacked. A player without a king is never
/// in check.
#[inline]
pub fn is_king_in_check(board: &ChessBoard, player: Player) -> bool {
    let Some(king) = king_position(board, player) else {
        return false;
    };
    is_position_attacked(board, king, player.opponent())
}
