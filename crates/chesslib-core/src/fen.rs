//! FEN (Forsyth-Edwards Notation) parsing.
//!
//! The board model tracks piece placement only, so the parser validates the
//! placement and active-color fields and ignores castling, en passant and
//! clock fields when present.

use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected at least 2 fields, got {0}")]
    MissingFields(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
///
/// Holds the raw parsed components; the board is responsible for turning
/// the placement string into its internal representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string (e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub piece_placement: String,
    /// Active color ('w' or 'b')
    pub active_color: char,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let piece_placement = parts[0];
        Self::validate_piece_placement(piece_placement)?;

        let active_color = match parts[1] {
            "w" => 'w',
            "b" => 'b',
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
        })
    }

    /// Validates the piece placement field: 8 ranks, each describing
    /// exactly 8 files with piece letters and empty-square digits.
    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for rank in &ranks {
            let mut files = 0u32;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if digit == 0 || digit > 8 {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "invalid empty-square count '{}'",
                            c
                        )));
                    }
                    files += digit;
                } else if matches!(
                    c.to_ascii_lowercase(),
                    'p' | 'n' | 'b' | 'r' | 'q' | 'k'
                ) {
                    files += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}'",
                        c
                    )));
                }
            }
            if files != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank '{}' describes {} files",
                    rank, files
                )));
            }
        }

        Ok(())
    }
}
