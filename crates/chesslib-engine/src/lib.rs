//! Board representation and move generation.
//!
//! This crate provides:
//! - [`Board`] - 8×8 mailbox board snapshot with full-value copying
//! - Move application with optional legality validation
//! - Per-piece-class legal move generation ([`MoveTable`])
//! - King-safety refresh ([`refresh_moves`] returning a [`MoveContext`])
//!
//! # Architecture
//!
//! The board is a plain 64-slot array of optional pieces. Hypothetical
//! futures are explored by cloning the whole board, so the search never
//! mutates the game board it was handed.
//!
//! # Example
//!
//! ```
//! use chesslib_core::{Color, KingState, Move};
//! use chesslib_engine::{refresh_moves, Board};
//!
//! let mut board = Board::startpos();
//! let ctx = refresh_moves(&board, Color::White);
//! assert_eq!(ctx.king_safety(Color::White), KingState::Safe);
//! assert_eq!(ctx.moves.len(), 20);
//!
//! let m = Move::from_labels("e2e4").unwrap();
//! assert!(board.apply_move(m, Color::White, true));
//! ```

mod board;
mod movegen;

pub use board::Board;
pub use movegen::{
    is_square_attacked, legal_moves, refresh_moves, MoveContext, MoveList, MoveTable,
};
