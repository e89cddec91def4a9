//! Core types for chess.
//!
//! This crate provides the fundamental types used across the chess library:
//! - [`Color`] and [`Piece`] for piece representation
//! - [`Square`] for board coordinates with 2-character labels
//! - [`Move`] for start/end move records
//! - [`KingState`] for per-side king-safety classification
//! - FEN parsing for test-position and display setup

mod color;
mod fen;
mod king;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use king::KingState;
pub use mov::Move;
pub use piece::Piece;
pub use square::Square;
