//! Board snapshot representation.

use crate::movegen::legal_moves;
use chesslib_core::{Color, FenError, FenParser, Move, Piece, Square};
use std::fmt;

/// A full-board snapshot: 64 squares, each optionally holding a piece.
///
/// Cloning a `Board` duplicates every square, which is how the search
/// explores hypothetical futures without touching the real game board.
///
/// Invariant: at most one king of each color is present. A missing king is
/// a terminal evaluation signal for the search, never an error here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<(Piece, Color)>; Square::COUNT],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board from a FEN string. The active-color field is
    /// validated but not stored; side to move is tracked by the caller.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        let mut board = Board::empty();

        // FEN lists ranks from 8 down to 1.
        for (rank_idx, rank_str) in parsed.piece_placement.split('/').enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0u8;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    file += digit as u8;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    if let Some(sq) = Square::new(file, rank) {
                        board.squares[sq.index() as usize] = Some((piece, color));
                    }
                    file += 1;
                }
            }
        }

        Ok(board)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.index() as usize]
    }

    /// Places (or clears) a piece on the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<(Piece, Color)>) {
        self.squares[sq.index() as usize] = piece;
    }

    /// Returns the square of the given color's king, or `None` if that
    /// king is no longer on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.iter()
            .find(|&(_, piece, c)| piece == Piece::King && c == color)
            .map(|(sq, _, _)| sq)
    }

    /// Returns an iterator over all occupied squares.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(piece, color)| (sq, piece, color)))
    }

    /// Applies a move for `color`, mutating only this snapshot.
    ///
    /// With `validate == false` the move is trusted to have come from the
    /// move generator and is applied without legality re-checking; the
    /// search always runs in this mode. With `validate == true` the move
    /// must be present in the freshly generated legal move table.
    ///
    /// Pawns reaching their promotion rank become queens. Returns whether
    /// the move was structurally applicable: the start square must hold a
    /// piece of the mover's color.
    pub fn apply_move(&mut self, m: Move, color: Color, validate: bool) -> bool {
        if validate && !legal_moves(self, color).contains(m) {
            return false;
        }

        let Some((piece, piece_color)) = self.piece_at(m.start()) else {
            return false;
        };
        if piece_color != color {
            return false;
        }

        let landed = if piece == Piece::Pawn && m.end().rank() == color.promotion_rank() {
            Piece::Queen
        } else {
            piece
        };
        self.set(m.start(), None);
        self.set(m.end(), Some((landed, color)));
        true
    }
}

impl fmt::Display for Board {
    /// Renders the board as an 8-line grid, rank 8 first, with FEN piece
    /// letters and dots for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = Square::new(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |(piece, color)| piece.to_fen_char(color));
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
