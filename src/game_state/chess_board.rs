//! Core board state representation.
//!
//! `ChessBoard` is the central model of the engine. It stores a flat 64-cell
//! grid, per-player occupancy caches, the side to move, castling rights, the
//! one-ply en-passant target, the draw counter and the undo stack. Derived
//! values (legal moves, check/mate/stalemate/draw flags, material advantage)
//! are recomputed from scratch at the end of every construction, apply and
//! undo, so callers only ever observe values that match the current cells.

use std::fmt;

use tracing::{debug, instrument, warn};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board_position::{positions_in_mask, BoardPosition};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{Advantage, GameStatus};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::{
    attacked_mask, attackers_of, is_king_in_check, is_position_attacked,
};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub(crate) cells: [Option<ChessPiece>; 64],
    pub(crate) occupancy_by_player: [u64; 2],

    pub(crate) current_player: Player,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<BoardPosition>,
    pub(crate) draw_counter: u16,

    pub(crate) undo_stack: Vec<UndoState>,

    // Derived, refreshed after every mutation.
    legal_moves: Vec<ChessMove>,
    status: GameStatus,
    advantage: Advantage,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Standard opening layout, player one to move.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for player in Player::BOTH {
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.put_piece(
                    BoardPosition::from_row_col(player.back_row(), col as u8),
                    ChessPiece::new(*kind, player),
                );
                board.put_piece(
                    BoardPosition::from_row_col(player.pawn_row(), col as u8),
                    ChessPiece::new(PieceKind::Pawn, player),
                );
            }
        }
        board.castling_rights = board.home_square_castling_rights();
        board.refresh_derived_state();
        debug!("created standard board");
        board
    }

    /// Scenario board: only the listed cells are occupied, player one to move.
    ///
    /// Castling rights are granted per side only when that side's king and
    /// rook stand on their home squares.
    #[instrument(skip(placements))]
    pub fn from_positions<I>(placements: I) -> ChessResult<Self>
    where
        I: IntoIterator<Item = (BoardPosition, ChessPiece)>,
    {
        let mut board = Self::empty();
        let mut kings = [0usize; 2];

        for (position, piece) in placements {
            if board.cells[position.square() as usize].is_some() {
                return Err((position, "square listed twice").into());
            }
            if piece.kind == PieceKind::King {
                kings[piece.player.index()] += 1;
                if kings[piece.player.index()] > 1 {
                    return Err((position, "second king for the same player").into());
                }
            }
            board.put_piece(position, piece);
        }

        board.castling_rights = board.home_square_castling_rights();
        board.refresh_derived_state();
        debug!(
            castling_rights = board.castling_rights,
            "created scenario board"
        );
        Ok(board)
    }

    fn empty() -> Self {
        Self {
            cells: [None; 64],
            occupancy_by_player: [0; 2],
            current_player: Player::One,
            castling_rights: 0,
            en_passant_target: None,
            draw_counter: 0,
            undo_stack: Vec::new(),
            legal_moves: Vec::new(),
            status: GameStatus::default(),
            advantage: Advantage::default(),
        }
    }

    fn home_square_castling_rights(&self) -> CastlingRights {
        let mut rights = 0;
        for player in Player::BOTH {
            let row = player.back_row();
            let king_home = BoardPosition::from_row_col(row, KING_HOME_COL);
            if !self.piece_is(king_home, PieceKind::King, player) {
                continue;
            }
            for side in CastleSide::BOTH {
                let rook_home = BoardPosition::from_row_col(row, side.rook_home_col());
                if self.piece_is(rook_home, PieceKind::Rook, player) {
                    rights |= castle_flag(player, side);
                }
            }
        }
        rights
    }

    // --- Cell access shared with the move pipeline ---

    #[inline]
    pub(crate) fn put_piece(&mut self, position: BoardPosition, piece: ChessPiece) {
        let idx = position.square() as usize;
        if let Some(old) = self.cells[idx] {
            self.occupancy_by_player[old.player.index()] &= !position.mask();
        }
        self.cells[idx] = Some(piece);
        self.occupancy_by_player[piece.player.index()] |= position.mask();
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, position: BoardPosition) -> Option<ChessPiece> {
        let piece = self.cells[position.square() as usize].take()?;
        self.occupancy_by_player[piece.player.index()] &= !position.mask();
        Some(piece)
    }

    #[inline]
    pub(crate) fn piece_is(&self, position: BoardPosition, kind: PieceKind, player: Player) -> bool {
        self.piece_at(position)
            .is_some_and(|piece| piece.is(kind, player))
    }

    #[inline]
    pub(crate) fn occupancy(&self, player: Player) -> u64 {
        self.occupancy_by_player[player.index()]
    }

    #[inline]
    pub(crate) fn occupancy_all(&self) -> u64 {
        self.occupancy_by_player[0] | self.occupancy_by_player[1]
    }

    /// Bitboard of `player`'s pieces of `kind`.
    pub(crate) fn pieces_mask(&self, kind: PieceKind, player: Player) -> u64 {
        positions_in_mask(self.occupancy(player))
            .filter(|&position| self.piece_is(position, kind, player))
            .fold(0u64, |acc, position| acc | position.mask())
    }

    fn refresh_derived_state(&mut self) {
        let legal = generate_legal_moves(self);
        let king_attacked = is_king_in_check(self, self.current_player);
        self.status = GameStatus::evaluate(king_attacked, !legal.is_empty(), self.draw_counter);
        self.advantage = Advantage::from_cells(&self.cells);
        self.legal_moves = if self.status.is_finished() {
            Vec::new()
        } else {
            legal
        };
    }

    // --- Commands ---

    /// Apply a move from the current legal set.
    ///
    /// Moves that are not currently legal are rejected with
    /// `ChessErrors::IllegalMove` and leave the board untouched.
    pub fn apply_move(&mut self, chess_move: ChessMove) -> ChessResult<()> {
        if !self.legal_moves.contains(&chess_move) {
            warn!(%chess_move, player = self.current_player.id(), "rejected illegal move");
            return Err(ChessErrors::IllegalMove(chess_move));
        }
        let Some(undo) = make_move(self, chess_move) else {
            return Err(ChessErrors::IllegalMove(chess_move));
        };

        self.undo_stack.push(undo);
        self.refresh_derived_state();
        debug!(
            %chess_move,
            captured = ?undo.captured_piece().map(|p| p.kind),
            draw_counter = self.draw_counter,
            next_player = self.current_player.id(),
            "applied move"
        );
        Ok(())
    }

    /// Undo the most recent move and return its history record.
    pub fn undo_last_move(&mut self) -> ChessResult<UndoState> {
        let Some(undo) = self.undo_stack.pop() else {
            warn!("undo requested with empty history");
            return Err(ChessErrors::NoMoveToUndo);
        };

        unmake_move(self, &undo);
        self.refresh_derived_state();
        debug!(
            chess_move = %undo.chess_move,
            history_len = self.undo_stack.len(),
            "undid move"
        );
        Ok(undo)
    }

    // --- Queries ---

    #[inline]
    pub fn piece_at(&self, position: BoardPosition) -> Option<ChessPiece> {
        self.cells[position.square() as usize]
    }

    /// Owner of the piece at `position`, `None` for an empty cell.
    #[inline]
    pub fn player_at(&self, position: BoardPosition) -> Option<Player> {
        self.piece_at(position).map(|piece| piece.player)
    }

    #[inline]
    pub fn position_is_empty(&self, position: BoardPosition) -> bool {
        self.piece_at(position).is_none()
    }

    /// True when `position` holds a piece belonging to `player`'s opponent.
    #[inline]
    pub fn position_is_enemy(&self, position: BoardPosition, player: Player) -> bool {
        self.player_at(position) == Some(player.opponent())
    }

    /// Positions holding a `kind` piece owned by `player`, in square order.
    pub fn positions_of(&self, kind: PieceKind, player: Player) -> Vec<BoardPosition> {
        positions_in_mask(self.pieces_mask(kind, player)).collect()
    }

    /// Legal moves of the current player; empty once the game is finished.
    #[inline]
    pub fn possible_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    /// Every square `player` threatens, in square order.
    pub fn attacked_positions(&self, player: Player) -> Vec<BoardPosition> {
        positions_in_mask(attacked_mask(self, player)).collect()
    }

    #[inline]
    pub fn is_position_attacked(&self, position: BoardPosition, by: Player) -> bool {
        is_position_attacked(self, position, by)
    }

    /// Pieces of `by` attacking `position`, with their squares.
    pub fn attackers_of(&self, position: BoardPosition, by: Player) -> Vec<(BoardPosition, ChessPiece)> {
        attackers_of(self, position, by)
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn current_advantage(&self) -> Advantage {
        self.advantage
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.status.is_check
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.status.is_checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.status.is_stalemate
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.status.is_draw
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    #[inline]
    pub fn draw_counter(&self) -> u16 {
        self.draw_counter
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn move_history(&self) -> &[UndoState] {
        &self.undo_stack
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Whether `player` still holds the right to castle toward `side`.
    #[inline]
    pub fn has_castling_right(&self, player: Player, side: CastleSide) -> bool {
        self.castling_rights & castle_flag(player, side) != 0
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<BoardPosition> {
        self.en_passant_target
    }
}

impl fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::ChessBoard;
    use crate::errors::ChessErrors;
    use crate::game_state::board_position::BoardPosition;
    use crate::game_state::chess_types::*;

    fn pos(name: &str) -> BoardPosition {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn standard_layout_has_thirty_two_pieces() {
        let board = ChessBoard::new();
        assert_eq!(board.occupancy(Player::One).count_ones(), 16);
        assert_eq!(board.occupancy(Player::Two).count_ones(), 16);
        assert_eq!(board.castling_rights(), CASTLE_ALL);
        assert_eq!(board.positions_of(PieceKind::King, Player::One), vec![pos("e1")]);
        assert_eq!(board.positions_of(PieceKind::King, Player::Two), vec![pos("e8")]);
    }

    #[test]
    fn occupancy_follows_put_and_take() {
        let mut board = ChessBoard::new();
        let e2 = pos("e2");
        let pawn = board.take_piece(e2).expect("e2 holds a pawn");
        assert_eq!(board.occupancy(Player::One) & e2.mask(), 0);

        let e4 = pos("e4");
        board.put_piece(e4, pawn);
        assert_ne!(board.occupancy(Player::One) & e4.mask(), 0);

        // Overwriting an enemy piece moves the occupancy bit across.
        let d7 = pos("d7");
        board.put_piece(d7, pawn);
        assert_eq!(board.occupancy(Player::Two) & d7.mask(), 0);
        assert_ne!(board.occupancy(Player::One) & d7.mask(), 0);
    }

    #[test]
    fn scenario_rejects_duplicate_square_and_second_king() {
        let king = ChessPiece::new(PieceKind::King, Player::One);
        let rook = ChessPiece::new(PieceKind::Rook, Player::One);

        let dup = ChessBoard::from_positions([(pos("e1"), king), (pos("e1"), rook)]);
        assert!(matches!(dup, Err(ChessErrors::InvalidPlacement(_))));

        let two_kings = ChessBoard::from_positions([(pos("e1"), king), (pos("e2"), king)]);
        assert!(matches!(two_kings, Err(ChessErrors::InvalidPlacement(_))));
    }

    #[test]
    fn scenario_castling_rights_need_home_squares() {
        let board = ChessBoard::from_positions([
            (pos("e1"), ChessPiece::new(PieceKind::King, Player::One)),
            (pos("a1"), ChessPiece::new(PieceKind::Rook, Player::One)),
            (pos("h2"), ChessPiece::new(PieceKind::Rook, Player::One)),
            (pos("d8"), ChessPiece::new(PieceKind::King, Player::Two)),
            (pos("h8"), ChessPiece::new(PieceKind::Rook, Player::Two)),
        ])
        .expect("scenario should build");

        assert!(board.has_castling_right(Player::One, CastleSide::QueenSide));
        assert!(!board.has_castling_right(Player::One, CastleSide::KingSide));
        assert!(!board.has_castling_right(Player::Two, CastleSide::KingSide));
        assert!(!board.has_castling_right(Player::Two, CastleSide::QueenSide));
    }

    #[test]
    fn pieces_mask_selects_kind_and_player() {
        let board = ChessBoard::new();
        let knights = board.pieces_mask(PieceKind::Knight, Player::Two);
        assert_eq!(knights, pos("b8").mask() | pos("g8").mask());
    }
}
