//! Move-tree construction, best-move readback, and diagnostic rendering.

use crate::arena::{NodeId, SearchError, TreeArena};
use crate::eval::evaluate;
use chesslib_core::{Color, Move};
use chesslib_engine::{refresh_moves, Board};
use std::io::{self, Write};

/// Maximum number of candidate moves considered per tree node. Candidates
/// past the bound are truncated deterministically, in candidate order.
pub const BRANCHING_BOUND: usize = 50;

/// Whose half-move a ply of the tree represents.
///
/// Alternation is driven by this explicit tag rather than a depth check:
/// the root's children belong to the searching side, and every deeper ply
/// flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlyTurn {
    /// The side the search was invoked for moves at this ply.
    SearchingSide,
    /// The adversary moves at this ply; the pruning heuristic applies.
    Opponent,
}

impl PlyTurn {
    /// Returns the tag for the next deeper ply.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            PlyTurn::SearchingSide => PlyTurn::Opponent,
            PlyTurn::Opponent => PlyTurn::SearchingSide,
        }
    }

    /// Returns the color that moves at this ply.
    #[inline]
    pub const fn mover(self, searching: Color) -> Color {
        match self {
            PlyTurn::SearchingSide => searching,
            PlyTurn::Opponent => searching.opposite(),
        }
    }
}

/// One node of the move tree.
///
/// The root is a sentinel: no move, ply 0, mover set to the searching
/// side. Scores are always from the searching side's perspective.
#[derive(Debug)]
pub struct TreeNode {
    /// The move this node represents; `None` only for the root sentinel.
    pub mv: Option<Move>,
    /// The color that played [`mv`](Self::mv).
    pub color: Color,
    /// Evaluation of the position after this node's move, from the
    /// searching side's perspective.
    pub score: i32,
    /// Distance from the root in half-moves.
    pub ply: u16,
    /// Children in candidate order. Grows as needed; never holds more
    /// than [`BRANCHING_BOUND`] entries.
    pub children: Vec<NodeId>,
    /// Back-reference to the parent node.
    pub parent: Option<NodeId>,
}

/// A fully built scored move tree, owning its arena.
///
/// Dropping the tree releases every node; the arena never outlives the
/// search invocation that created it.
#[derive(Debug)]
pub struct SearchTree {
    arena: TreeArena,
    root: NodeId,
    searching: Color,
    depth: u16,
}

impl SearchTree {
    /// Returns the arena holding the tree's nodes.
    pub fn arena(&self) -> &TreeArena {
        &self.arena
    }

    /// Returns the root sentinel's handle.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the side the tree was built for.
    pub fn searching(&self) -> Color {
        self.searching
    }

    /// Returns the ply depth the tree was built to.
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// Returns the total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Picks the first-ply child with the highest score, ties broken by
    /// candidate order. `None` when the searching side had no moves.
    pub fn best_move(&self) -> Option<Move> {
        let mut best: Option<(i32, Move)> = None;
        for &id in &self.arena.get(self.root).children {
            let child = self.arena.get(id);
            let Some(m) = child.mv else { continue };
            match best {
                Some((score, _)) if child.score <= score => {}
                _ => best = Some((child.score, m)),
            }
        }
        best.map(|(_, m)| m)
    }

    /// Renders the tree depth-first in pre-order, one line per edge,
    /// indented proportionally to ply. Debugging aid; never mutates the
    /// tree.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        self.render_node(self.root, out)
    }

    fn render_node(&self, node: NodeId, out: &mut dyn Write) -> io::Result<()> {
        let parent = self.arena.get(node);
        for &id in &parent.children {
            let child = self.arena.get(id);
            let Some(m) = child.mv else { continue };
            for _ in 1..child.ply {
                write!(out, "\t")?;
            }
            match parent.mv {
                None => writeln!(
                    out,
                    "ply 1: {} opens {} (score {})",
                    child.color, m, child.score
                )?,
                Some(parent_move) => writeln!(
                    out,
                    "ply {}: after {}'s {}, {} moves {} (score {})",
                    child.ply, parent.color, parent_move, child.color, m, child.score
                )?,
            }
            self.render_node(id, out)?;
        }
        Ok(())
    }
}

/// Builds the scored move tree for `searching` to the given ply depth.
///
/// The input board is never mutated; every hypothetical future works on a
/// fresh clone. On error the partially built arena is dropped in full.
pub fn build_search_tree(
    board: &Board,
    searching: Color,
    depth: u16,
) -> Result<SearchTree, SearchError> {
    let mut arena = TreeArena::new();
    let root = arena.alloc(TreeNode {
        mv: None,
        color: searching,
        score: 0,
        ply: 0,
        children: Vec::new(),
        parent: None,
    })?;

    let mut builder = Builder {
        arena: &mut arena,
        searching,
        depth,
    };
    builder.expand(root, board, PlyTurn::SearchingSide)?;

    Ok(SearchTree {
        arena,
        root,
        searching,
        depth,
    })
}

/// Chooses a move for `color` by building a tree `depth` plies deep and
/// reading back the best-scoring first-ply move.
///
/// `depth == 0` is a recoverable invalid input: the call is a no-op
/// returning `Ok(None)`. `Ok(None)` is also the answer when `color` has
/// no legal moves. The only error is arena exhaustion.
pub fn get_ai_move(board: &Board, color: Color, depth: u16) -> Result<Option<Move>, SearchError> {
    if depth == 0 {
        return Ok(None);
    }

    let tree = build_search_tree(board, color, depth)?;
    let chosen = tree.best_move();
    tracing::debug!(
        nodes = tree.node_count(),
        depth,
        chosen = ?chosen,
        "search tree complete"
    );
    Ok(chosen)
}

struct Builder<'a> {
    arena: &'a mut TreeArena,
    searching: Color,
    depth: u16,
}

impl Builder<'_> {
    /// Expands one node: enumerates the mover's candidates, prunes
    /// opponent moves that would improve the searching side's evaluation
    /// past the node's own score, scores every retained child, and
    /// recurses with the turn flipped until the ply bound.
    fn expand(&mut self, node: NodeId, board: &Board, turn: PlyTurn) -> Result<(), SearchError> {
        let (ply, node_score) = {
            let n = self.arena.get(node);
            (n.ply, n.score)
        };
        if ply >= self.depth {
            return Ok(());
        }

        let mover = turn.mover(self.searching);
        let ctx = refresh_moves(board, mover);

        for m in ctx.moves.iter_candidates().take(BRANCHING_BOUND) {
            let mut next = board.clone();
            let applied = next.apply_move(m, mover, false);
            debug_assert!(applied, "move generator produced an inapplicable move");

            let score = evaluate(&next, self.searching);
            // The opponent is assumed not to play into a position that is
            // better for the searching side than the one it is in now.
            if turn == PlyTurn::Opponent && score > node_score {
                continue;
            }

            let child = self.arena.alloc(TreeNode {
                mv: Some(m),
                color: mover,
                score,
                ply: ply + 1,
                children: Vec::new(),
                parent: Some(node),
            })?;
            self.arena.get_mut(node).children.push(child);
            self.expand(child, &next, turn.flip())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Walks every node reachable from the root, pre-order.
    fn walk(tree: &SearchTree) -> Vec<NodeId> {
        let mut stack = vec![tree.root()];
        let mut seen = Vec::new();
        while let Some(id) = stack.pop() {
            seen.push(id);
            stack.extend(tree.arena().get(id).children.iter().copied());
        }
        seen
    }

    #[test]
    fn tree_structure_invariants() {
        let board = Board::startpos();
        let tree = build_search_tree(&board, Color::White, 2).unwrap();
        let nodes = walk(&tree);

        // Every allocation is reachable from the root.
        assert_eq!(nodes.len(), tree.node_count());

        for &id in &nodes {
            let node = tree.arena().get(id);
            assert!(node.ply <= 2);
            assert!(node.children.len() <= BRANCHING_BOUND);

            // Strict color alternation from the searching side.
            if node.ply > 0 {
                let expected = if node.ply % 2 == 1 {
                    Color::White
                } else {
                    Color::Black
                };
                assert_eq!(node.color, expected);
            }

            for &child_id in &node.children {
                let child = tree.arena().get(child_id);
                assert_eq!(child.ply, node.ply + 1);
                assert_eq!(child.parent, Some(id));
            }
        }
    }

    #[test]
    fn opponent_children_never_beat_parent_score() {
        let board = Board::startpos();
        let tree = build_search_tree(&board, Color::White, 3).unwrap();

        for &id in &walk(&tree) {
            let node = tree.arena().get(id);
            if node.ply > 0 && node.color == Color::Black {
                let parent = tree.arena().get(node.parent.unwrap());
                assert!(node.score <= parent.score);
            }
        }
    }

    #[test]
    fn root_is_sentinel() {
        let board = Board::startpos();
        let tree = build_search_tree(&board, Color::Black, 1).unwrap();
        let root = tree.arena().get(tree.root());
        assert_eq!(root.mv, None);
        assert_eq!(root.ply, 0);
        assert_eq!(root.parent, None);
        assert_eq!(root.children.len(), 20);
    }

    #[test]
    fn depth_zero_is_a_noop() {
        let board = Board::startpos();
        assert_eq!(get_ai_move(&board, Color::White, 0), Ok(None));
    }

    #[test]
    fn promotion_is_preferred() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        for depth in [1, 2] {
            let chosen = get_ai_move(&board, Color::White, depth).unwrap();
            assert_eq!(chosen, Move::from_labels("a7a8"));
        }
    }

    #[test]
    fn ties_break_by_candidate_order() {
        // No first move changes White's own material, so the first
        // candidate wins: the a2 pawn's single push.
        let board = Board::startpos();
        let chosen = get_ai_move(&board, Color::White, 1).unwrap();
        assert_eq!(chosen, Move::from_labels("a2a3"));
    }

    #[test]
    fn render_is_readable_and_pure() {
        let board = Board::startpos();
        let tree = build_search_tree(&board, Color::White, 2).unwrap();
        let before = tree.node_count();

        let mut out = Vec::new();
        tree.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("ply 1: White opens a2a3"));
        assert!(text.contains("ply 2: after White's"));
        assert!(text.lines().count() >= before - 1);
        assert_eq!(tree.node_count(), before);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn no_node_exceeds_depth(depth in 1u16..=2) {
            let board = Board::startpos();
            let tree = build_search_tree(&board, Color::White, depth).unwrap();
            for &id in &walk(&tree) {
                prop_assert!(tree.arena().get(id).ply <= depth);
            }
        }
    }
}
