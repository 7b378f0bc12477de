//! Shared helpers for the integration tests.

#![allow(dead_code)]

use plum_board::utils::placement::parse_placement;
use plum_board::{BoardPosition, ChessBoard, ChessMove};

pub fn pos(name: &str) -> BoardPosition {
    name.parse().expect("test square should parse")
}

/// Board from a piece-placement layout, player one to move.
pub fn scenario(layout: &str) -> ChessBoard {
    let placements = parse_placement(layout).expect("test layout should parse");
    ChessBoard::from_positions(placements).expect("test board should build")
}

/// The legal move from `start` to `end`, if exactly one exists.
pub fn find_move(board: &ChessBoard, start: &str, end: &str) -> Option<ChessMove> {
    let (start, end) = (pos(start), pos(end));
    let mut matching = board
        .possible_moves()
        .iter()
        .filter(|mv| mv.start == start && mv.end == end);
    let first = matching.next().copied();
    if matching.next().is_some() {
        return None;
    }
    first
}

/// Apply a comma-separated list of coordinate moves such as `e2e4,e7e5`.
pub fn play(board: &mut ChessBoard, moves: &str) {
    for text in moves.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (start, end) = text.split_at(2);
        let mv = find_move(board, start, end)
            .unwrap_or_else(|| panic!("{text} should be a legal move\n{board}"));
        board
            .apply_move(mv)
            .unwrap_or_else(|err| panic!("{text} failed: {err}"));
    }
}
