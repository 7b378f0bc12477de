//! Square name conversions.
//!
//! Converts between square names (for example `e4`) and `BoardPosition`.
//! Only squares are handled; move notation belongs to the front ends.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board_position::BoardPosition;

/// Convert a square name (for example: "e4") to a board position.
#[inline]
pub fn algebraic_to_position(square: &str) -> ChessResult<BoardPosition> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = (file - b'a') as i32;
    let row = (b'8' - rank) as i32;
    BoardPosition::new(row, col)
}

/// Convert a board position to its square name (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: BoardPosition) -> String {
    let file_char = char::from(b'a' + position.col());
    let rank_char = char::from(b'8' - position.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::errors::ChessErrors;
    use crate::game_state::board_position::BoardPosition;

    #[test]
    fn corner_squares_map_to_rows_and_cols() {
        let a8 = algebraic_to_position("a8").expect("a8 should parse");
        assert_eq!((a8.row(), a8.col()), (0, 0));
        let h1 = algebraic_to_position("h1").expect("h1 should parse");
        assert_eq!((h1.row(), h1.col()), (7, 7));
        let e2 = algebraic_to_position("E2").expect("uppercase file should parse");
        assert_eq!((e2.row(), e2.col()), (6, 4));
    }

    #[test]
    fn every_square_name_round_trips() {
        for position in BoardPosition::all() {
            let name = position_to_algebraic(position);
            assert_eq!(algebraic_to_position(&name), Ok(position));
        }
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "e", "e9", "i1", "e22", "4e"] {
            assert_eq!(
                algebraic_to_position(bad),
                Err(ChessErrors::InvalidAlgebraicString(bad.to_owned()))
            );
        }
    }
}
