//! Construction, apply/undo and per-piece behaviour through the public API.

mod common;

use common::{find_move, play, pos, scenario};
use plum_board::{
    Advantage, CastleSide, ChessBoard, ChessErrors, ChessMove, ChessMoveType, ChessPiece,
    PieceKind, Player,
};

#[test]
fn test_new_board_initial_state() {
    let board = ChessBoard::new();
    assert_eq!(board.possible_moves().len(), 20);
    assert_eq!(board.current_player(), Player::One);
    assert_eq!(board.current_advantage(), Advantage::default());
    assert_eq!(board.current_advantage().player_id(), 0);
    assert!(!board.is_check());
    assert!(!board.is_checkmate());
    assert!(!board.is_stalemate());
    assert!(!board.is_draw());
    assert!(!board.is_finished());
    assert_eq!(board.draw_counter(), 0);
    assert!(board.move_history().is_empty());
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board, ChessBoard::default());
}

#[test]
fn test_new_board_queries() {
    let board = ChessBoard::new();
    assert_eq!(
        board.piece_at(pos("d1")),
        Some(ChessPiece::new(PieceKind::Queen, Player::One))
    );
    assert_eq!(board.player_at(pos("c8")), Some(Player::Two));
    assert_eq!(board.player_at(pos("c5")), None);
    assert!(board.position_is_empty(pos("e4")));
    assert!(board.position_is_enemy(pos("e7"), Player::One));
    assert!(!board.position_is_enemy(pos("e2"), Player::One));
    assert!(!board.position_is_enemy(pos("e4"), Player::One));
    assert_eq!(board.positions_of(PieceKind::Pawn, Player::Two).len(), 8);
    assert_eq!(board.attacked_positions(Player::One).len(), 22);
}

#[test]
fn test_undo_with_empty_history_fails() {
    let mut board = ChessBoard::new();
    assert_eq!(board.undo_last_move(), Err(ChessErrors::NoMoveToUndo));
    assert_eq!(board, ChessBoard::new());
}

#[test]
fn test_illegal_move_is_rejected_without_change() {
    let mut board = ChessBoard::new();
    let bogus = ChessMove::normal(pos("e2"), pos("e5"));
    assert_eq!(board.apply_move(bogus), Err(ChessErrors::IllegalMove(bogus)));

    // Right squares, wrong kind.
    let wrong_kind = ChessMove::new(pos("e2"), pos("e4"), ChessMoveType::EnPassant);
    assert!(board.apply_move(wrong_kind).is_err());
    assert_eq!(board, ChessBoard::new());
}

#[test]
fn test_reply_to_king_pawn_opening() {
    let mut board = ChessBoard::new();
    play(&mut board, "e2e4");

    assert_eq!(board.current_player(), Player::Two);
    assert_eq!(board.en_passant_target(), Some(pos("e3")));
    assert!(find_move(&board, "e7", "e5").is_some());
    assert!(find_move(&board, "e7", "e6").is_some());
    assert!(find_move(&board, "e7", "e4").is_none());
    assert_eq!(board.possible_moves().len(), 20);
}

#[test]
fn test_apply_then_undo_restores_state() {
    let mut board = ChessBoard::new();
    play(&mut board, "g1f3");
    assert_eq!(board.draw_counter(), 1);
    assert_eq!(board.move_history().len(), 1);

    let undo = board.undo_last_move().expect("undo should succeed");
    assert_eq!(undo.chess_move, ChessMove::normal(pos("g1"), pos("f3")));
    assert_eq!(undo.moved_piece, ChessPiece::new(PieceKind::Knight, Player::One));
    assert_eq!(board, ChessBoard::new());
}

#[test]
fn test_capture_updates_advantage_and_counter() {
    let mut board = ChessBoard::new();
    play(&mut board, "e2e4,d7d5,g1f3,g8f6");
    assert_eq!(board.draw_counter(), 2);

    play(&mut board, "e4d5");
    assert_eq!(board.draw_counter(), 0);
    assert_eq!(board.current_advantage().leader, Some(Player::One));
    assert_eq!(board.current_advantage().magnitude, 1);

    let undo = board.undo_last_move().expect("undo should succeed");
    assert_eq!(
        undo.captured_piece(),
        Some(ChessPiece::new(PieceKind::Pawn, Player::Two))
    );
    assert_eq!(board.draw_counter(), 2);
    assert_eq!(board.current_advantage().player_id(), 0);
}

#[test]
fn test_en_passant_window_is_one_ply() {
    let mut board = ChessBoard::new();
    play(&mut board, "e2e4,a7a6,e4e5,d7d5");
    assert_eq!(board.en_passant_target(), Some(pos("d6")));

    let ep = find_move(&board, "e5", "d6").expect("en passant should be offered");
    assert_eq!(ep.move_type, ChessMoveType::EnPassant);

    board.apply_move(ep).expect("en passant should apply");
    assert!(board.position_is_empty(pos("d5")));
    assert_eq!(board.current_advantage().magnitude, 1);

    board.undo_last_move().expect("undo should succeed");
    assert_eq!(
        board.piece_at(pos("d5")),
        Some(ChessPiece::new(PieceKind::Pawn, Player::Two))
    );
    assert_eq!(board.en_passant_target(), Some(pos("d6")));

    // A quiet pair of moves closes the window.
    play(&mut board, "h2h3,h7h6");
    assert!(find_move(&board, "e5", "d6").is_none());
}

#[test]
fn test_promotion_offers_four_reversible_moves() {
    let mut board = scenario("7k/1P6/8/8/8/8/8/K7");
    let promotions: Vec<ChessMove> = board
        .possible_moves()
        .iter()
        .copied()
        .filter(|mv| mv.move_type == ChessMoveType::PawnPromote)
        .collect();
    assert_eq!(promotions.len(), 4);

    let snapshot = board.clone();
    for mv in promotions {
        let kind = mv.promotion.expect("promotion kind should be set");
        board.apply_move(mv).expect("promotion should apply");
        assert_eq!(
            board.piece_at(pos("b8")),
            Some(ChessPiece::new(kind, Player::One))
        );
        board.undo_last_move().expect("undo should succeed");
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_castling_both_sides_relocate_rooks() {
    let mut board = scenario("r3k2r/8/8/8/8/8/8/R3K2R");

    let short = find_move(&board, "e1", "g1").expect("kingside castle should be offered");
    assert_eq!(short.move_type, ChessMoveType::CastleKingSide);
    board.apply_move(short).expect("castle should apply");
    assert_eq!(
        board.piece_at(pos("f1")),
        Some(ChessPiece::new(PieceKind::Rook, Player::One))
    );
    assert!(board.position_is_empty(pos("h1")));

    let long = find_move(&board, "e8", "c8").expect("queenside castle should be offered");
    assert_eq!(long.move_type, ChessMoveType::CastleQueenSide);
    board.apply_move(long).expect("castle should apply");
    assert_eq!(
        board.piece_at(pos("d8")),
        Some(ChessPiece::new(PieceKind::Rook, Player::Two))
    );
    assert_eq!(board.castling_rights(), 0);

    board.undo_last_move().expect("undo should succeed");
    board.undo_last_move().expect("undo should succeed");
    assert_eq!(board, scenario("r3k2r/8/8/8/8/8/8/R3K2R"));
}

#[test]
fn test_castling_right_loss_is_sticky_and_undoable() {
    let mut board = scenario("r3k2r/8/8/8/8/8/8/R3K2R");
    play(&mut board, "h1h2,a8a7,h2h1,a7a8");

    assert!(!board.has_castling_right(Player::One, CastleSide::KingSide));
    assert!(board.has_castling_right(Player::One, CastleSide::QueenSide));
    assert!(!board.has_castling_right(Player::Two, CastleSide::QueenSide));
    assert!(find_move(&board, "e1", "g1").is_none());
    assert!(find_move(&board, "e1", "c1").is_some());

    for _ in 0..4 {
        board.undo_last_move().expect("undo should succeed");
    }
    assert!(board.has_castling_right(Player::One, CastleSide::KingSide));
    assert!(find_move(&board, "e1", "g1").is_some());
}

#[test]
fn test_castling_blocked_by_attack_on_path() {
    // Black bishop on a6 covers f1.
    let board = scenario("4k3/8/b7/8/8/8/8/R3K2R");
    assert!(find_move(&board, "e1", "g1").is_none());
    assert!(find_move(&board, "e1", "c1").is_some());
}

#[test]
fn test_pinned_piece_and_check_evasion() {
    // Rook on e8 pins the knight and later checks the king.
    let mut board = scenario("k3r3/8/8/8/8/8/4N3/4K3");
    assert!(board.possible_moves().iter().all(|mv| mv.start != pos("e2")));

    play(&mut board, "e1d1,e8d8");
    assert!(board.is_check());
    assert!(!board.is_checkmate());
    assert!(board
        .possible_moves()
        .iter()
        .all(|mv| mv.start == pos("d1") || mv.end == pos("d4")));
}
