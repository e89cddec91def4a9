//! Bounded-depth adversarial move-tree search.
//!
//! This crate is the automated player: it expands a move tree to a fixed
//! ply depth, scores every node with a material evaluation, prunes
//! implausible opponent moves, and picks the best first-ply move.
//!
//! - [`evaluate`] - material scoring of a board snapshot for one side
//! - [`TreeArena`] - bulk-allocated node storage scoped to one search
//! - [`build_search_tree`] / [`SearchTree`] - tree construction and
//!   best-move readback
//! - [`get_ai_move`] - the public entry point
//!
//! # Example
//!
//! ```
//! use chesslib_core::Color;
//! use chesslib_engine::Board;
//! use chesslib_search::get_ai_move;
//!
//! let board = Board::startpos();
//! let chosen = get_ai_move(&board, Color::White, 2).unwrap();
//! assert!(chosen.is_some());
//! ```

mod arena;
mod eval;
mod tree;

pub use arena::{NodeId, SearchError, TreeArena, NODE_BUDGET};
pub use eval::{
    evaluate, BISHOP_VALUE, KING_LOST, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE,
};
pub use tree::{
    build_search_tree, get_ai_move, PlyTurn, SearchTree, TreeNode, BRANCHING_BOUND,
};
