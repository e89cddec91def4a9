//! Legal move generation.
//!
//! Moves are generated per piece class into a [`MoveTable`] (one list per
//! class, in the fixed pawn, king, queen, rook, knight, bishop ordering),
//! then filtered so no move leaves the mover's own king attacked.
//!
//! [`refresh_moves`] is the full enumeration pass: it produces the move
//! table for one side together with the king-safety state of both sides.

use crate::Board;
use chesslib_core::{Color, KingState, Move, Piece, Square};

/// Knight move offsets as (file, rank) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King move offsets as (file, rank) deltas.
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Rook ray directions.
const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Bishop ray directions.
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// A list of moves for one piece class, with a fixed maximum capacity.
///
/// Class lists are short (a handful of pieces each), so a fixed-size array
/// avoids heap allocations during generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Capacity of one class list. No piece class of one color can exceed
    /// this in a position reachable through [`Board::apply_move`].
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        // Placeholder entries beyond `len` are never read.
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Retains only moves for which the predicate returns true,
    /// preserving order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Per-class move lists for one side: exactly 6 lists, indexed by
/// [`Piece::CLASS_ORDER`].
#[derive(Debug, Clone)]
pub struct MoveTable {
    lists: [MoveList; 6],
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTable {
    /// Creates an empty move table.
    pub fn new() -> Self {
        MoveTable {
            lists: std::array::from_fn(|_| MoveList::new()),
        }
    }

    /// Returns the list for the given piece class.
    #[inline]
    pub fn list(&self, piece: Piece) -> &MoveList {
        &self.lists[piece.class_index()]
    }

    /// Adds a move to the given piece class's list.
    #[inline]
    pub fn push(&mut self, piece: Piece, m: Move) {
        self.lists[piece.class_index()].push(m);
    }

    /// Returns the total number of moves across all classes.
    pub fn len(&self) -> usize {
        self.lists.iter().map(MoveList::len).sum()
    }

    /// Returns true if no class has any moves.
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(MoveList::is_empty)
    }

    /// Returns true if the move appears in any class list.
    pub fn contains(&self, m: Move) -> bool {
        self.lists.iter().any(|list| list.as_slice().contains(&m))
    }

    /// Returns the single ordered candidate sequence: entries are consumed
    /// class by class in [`Piece::CLASS_ORDER`], each class's internal
    /// order preserved, continuing into the next class when one runs out.
    pub fn iter_candidates(&self) -> impl Iterator<Item = Move> + '_ {
        self.lists
            .iter()
            .flat_map(|list| list.as_slice().iter().copied())
    }

    fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        for list in &mut self.lists {
            list.retain(&mut f);
        }
    }
}

/// The result of one full move-enumeration pass: the legal moves of the
/// refreshed side and the king-safety state of both sides.
#[derive(Debug, Clone)]
pub struct MoveContext {
    /// Legal moves for the side the refresh was run for.
    pub moves: MoveTable,
    /// King-safety state per color, indexed by [`Color::index`].
    pub king_safety: [KingState; 2],
}

impl MoveContext {
    /// Returns the king-safety state of the given side.
    #[inline]
    pub fn king_safety(&self, color: Color) -> KingState {
        self.king_safety[color.index()]
    }
}

/// Runs a full move-enumeration pass for `color`.
///
/// King-safety classification follows the original library: a side with no
/// legal moves is `Checkmate` (stalemate included), a side whose king is
/// attacked but that can still move is `Check`, otherwise `Safe`.
pub fn refresh_moves(board: &Board, color: Color) -> MoveContext {
    let moves = legal_moves(board, color);
    let mut king_safety = [KingState::Safe; 2];

    for c in Color::BOTH {
        let has_moves = if c == color {
            !moves.is_empty()
        } else {
            !legal_moves(board, c).is_empty()
        };
        let attacked = match board.king_square(c) {
            Some(king) => is_square_attacked(board, king, c.opposite()),
            // A vanished king never blocks classification; the side is
            // simply treated as permanently threatened.
            None => true,
        };
        king_safety[c.index()] = if !has_moves {
            KingState::Checkmate
        } else if attacked {
            KingState::Check
        } else {
            KingState::Safe
        };
    }

    MoveContext { moves, king_safety }
}

/// Generates all legal moves for `color`, grouped per piece class.
pub fn legal_moves(board: &Board, color: Color) -> MoveTable {
    let mut table = MoveTable::new();

    for (sq, piece, c) in board.iter() {
        if c != color {
            continue;
        }
        match piece {
            Piece::Pawn => generate_pawn_moves(board, sq, color, &mut table),
            Piece::King => generate_step_moves(board, sq, color, piece, &KING_OFFSETS, &mut table),
            Piece::Knight => {
                generate_step_moves(board, sq, color, piece, &KNIGHT_OFFSETS, &mut table)
            }
            Piece::Rook => generate_ray_moves(board, sq, color, piece, &ROOK_DIRS, &mut table),
            Piece::Bishop => generate_ray_moves(board, sq, color, piece, &BISHOP_DIRS, &mut table),
            Piece::Queen => {
                generate_ray_moves(board, sq, color, piece, &ROOK_DIRS, &mut table);
                generate_ray_moves(board, sq, color, piece, &BISHOP_DIRS, &mut table);
            }
        }
    }

    // Reject moves that leave the mover's own king attacked.
    table.retain(|m| {
        let mut next = board.clone();
        next.apply_move(*m, color, false);
        match next.king_square(color) {
            Some(king) => !is_square_attacked(&next, king, color.opposite()),
            None => true,
        }
    });

    table
}

/// Returns true if `by` attacks the given square.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    // Pawn attacks come from one rank behind the target, relative to the
    // attacker's direction of travel.
    let pawn_rank_delta = -by.pawn_direction();
    for dfile in [-1i8, 1] {
        if let Some(from) = sq.offset(dfile, pawn_rank_delta) {
            if board.piece_at(from) == Some((Piece::Pawn, by)) {
                return true;
            }
        }
    }

    for &(dfile, drank) in &KNIGHT_OFFSETS {
        if let Some(from) = sq.offset(dfile, drank) {
            if board.piece_at(from) == Some((Piece::Knight, by)) {
                return true;
            }
        }
    }

    for &(dfile, drank) in &KING_OFFSETS {
        if let Some(from) = sq.offset(dfile, drank) {
            if board.piece_at(from) == Some((Piece::King, by)) {
                return true;
            }
        }
    }

    ray_attacker(board, sq, by, &ROOK_DIRS, Piece::Rook)
        || ray_attacker(board, sq, by, &BISHOP_DIRS, Piece::Bishop)
}

/// Returns true if the first piece along any of the given rays is a `by`
/// slider of the given kind (or a queen).
fn ray_attacker(board: &Board, sq: Square, by: Color, dirs: &[(i8, i8)], slider: Piece) -> bool {
    for &(dfile, drank) in dirs {
        let mut current = sq;
        while let Some(next) = current.offset(dfile, drank) {
            match board.piece_at(next) {
                Some((piece, color)) => {
                    if color == by && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                None => current = next,
            }
        }
    }
    false
}

fn generate_pawn_moves(board: &Board, sq: Square, color: Color, table: &mut MoveTable) {
    let dir = color.pawn_direction();

    if let Some(one) = sq.offset(0, dir) {
        if board.piece_at(one).is_none() {
            table.push(Piece::Pawn, Move::new(sq, one));

            if sq.rank() == color.pawn_rank() {
                if let Some(two) = sq.offset(0, 2 * dir) {
                    if board.piece_at(two).is_none() {
                        table.push(Piece::Pawn, Move::new(sq, two));
                    }
                }
            }
        }
    }

    for dfile in [-1i8, 1] {
        if let Some(target) = sq.offset(dfile, dir) {
            if matches!(board.piece_at(target), Some((_, c)) if c != color) {
                table.push(Piece::Pawn, Move::new(sq, target));
            }
        }
    }
}

fn generate_step_moves(
    board: &Board,
    sq: Square,
    color: Color,
    piece: Piece,
    offsets: &[(i8, i8)],
    table: &mut MoveTable,
) {
    for &(dfile, drank) in offsets {
        if let Some(target) = sq.offset(dfile, drank) {
            match board.piece_at(target) {
                Some((_, c)) if c == color => {}
                _ => table.push(piece, Move::new(sq, target)),
            }
        }
    }
}

fn generate_ray_moves(
    board: &Board,
    sq: Square,
    color: Color,
    piece: Piece,
    dirs: &[(i8, i8)],
    table: &mut MoveTable,
) {
    for &(dfile, drank) in dirs {
        let mut current = sq;
        while let Some(target) = current.offset(dfile, drank) {
            match board.piece_at(target) {
                None => {
                    table.push(piece, Move::new(sq, target));
                    current = target;
                }
                Some((_, c)) => {
                    if c != color {
                        table.push(piece, Move::new(sq, target));
                    }
                    break;
                }
            }
        }
    }
}
