//! Material evaluation of a board snapshot.

use chesslib_core::{Color, Piece};
use chesslib_engine::Board;

/// Piece values in centipawns.
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 325;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

/// Sentinel score returned when the perspective side's king has been
/// captured. Not a material value.
pub const KING_LOST: i32 = -1;

/// Scores the board for `perspective` by counting material.
///
/// The king carries no material value; instead, if the perspective side's
/// own king is absent from the board the sentinel [`KING_LOST`] is
/// returned. A missing *opposing* king is deliberately not special-cased
/// and scores as a plain material balance, matching the original engine.
///
/// Pure and total: no side effects, defined for any board contents.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let mut balance = 0;
    let mut king_seen = false;

    for (_, piece, color) in board.iter() {
        if color != perspective {
            continue;
        }
        match piece {
            Piece::Pawn => balance += PAWN_VALUE,
            Piece::Knight => balance += KNIGHT_VALUE,
            Piece::Bishop => balance += BISHOP_VALUE,
            Piece::Rook => balance += ROOK_VALUE,
            Piece::Queen => balance += QUEEN_VALUE,
            Piece::King => king_seen = true,
        }
    }

    if !king_seen {
        return KING_LOST;
    }
    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn startpos_material() {
        let board = Board::startpos();
        let expected = 8 * PAWN_VALUE + 2 * KNIGHT_VALUE + 2 * BISHOP_VALUE
            + 2 * ROOK_VALUE + QUEEN_VALUE;
        assert_eq!(evaluate(&board, Color::White), expected);
        assert_eq!(evaluate(&board, Color::Black), expected);
    }

    #[test]
    fn queen_and_seven_pawns() {
        let board = Board::from_fen("4k3/8/8/8/8/8/PPPPPPP1/3QK3 w - - 0 1").unwrap();
        assert_eq!(evaluate(&board, Color::White), 1600);
        assert_eq!(evaluate(&board, Color::Black), 0);
    }

    #[test]
    fn missing_own_king_is_sentinel() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/3Q4 w - - 0 1").unwrap();
        assert_eq!(evaluate(&board, Color::White), KING_LOST);
    }

    #[test]
    fn missing_opposing_king_is_not_special() {
        // The asymmetry is inherited: only the perspective side's own
        // missing king triggers the sentinel.
        let board = Board::from_fen("8/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert_eq!(evaluate(&board, Color::White), QUEEN_VALUE);
        assert_eq!(evaluate(&board, Color::Black), KING_LOST);
    }

    #[test]
    fn empty_board_is_total() {
        let board = Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(evaluate(&board, Color::White), KING_LOST);
        assert_eq!(evaluate(&board, Color::Black), KING_LOST);
    }

    proptest! {
        #[test]
        fn deterministic_and_pure(placements in proptest::collection::vec(
            (0u8..64, 0u8..6, proptest::bool::ANY),
            0..24,
        )) {
            use chesslib_core::Square;

            let mut board = Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
            for (index, class, is_white) in placements {
                let sq = Square::from_index(index).unwrap();
                let piece = Piece::CLASS_ORDER[class as usize];
                let color = if is_white { Color::White } else { Color::Black };
                board.set(sq, Some((piece, color)));
            }

            let before = board.clone();
            let first = evaluate(&board, Color::White);
            let second = evaluate(&board, Color::White);
            prop_assert_eq!(first, second);
            prop_assert_eq!(&board, &before);
        }
    }
}
