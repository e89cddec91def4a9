//! Bulk-allocated tree-node storage.
//!
//! Tree nodes are created across many recursive calls and sibling
//! branches; rather than threading ownership through the parent/child
//! graph, every allocation lands in one arena scoped to a single search
//! invocation. Releasing the arena frees every node exactly once, no
//! matter where in the recursion it was created.

use crate::tree::TreeNode;
use thiserror::Error;

/// Maximum number of nodes one search invocation may allocate.
///
/// Exceeding it is a resource-exhaustion error, reported instead of
/// growing without bound.
pub const NODE_BUDGET: usize = 1 << 22;

/// Errors produced by the search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search tree exceeded the node budget of {budget} nodes")]
    NodeBudgetExceeded { budget: usize },
}

/// Handle to a node inside a [`TreeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Arena holding every tree node of one search invocation.
#[derive(Debug)]
pub struct TreeArena {
    nodes: Vec<TreeNode>,
    budget: usize,
}

impl TreeArena {
    /// Creates an empty arena with the default [`NODE_BUDGET`].
    pub fn new() -> Self {
        Self::with_budget(NODE_BUDGET)
    }

    /// Creates an empty arena with a custom node budget.
    pub fn with_budget(budget: usize) -> Self {
        TreeArena {
            nodes: Vec::new(),
            budget,
        }
    }

    /// Records one node allocation and returns its handle.
    pub fn alloc(&mut self, node: TreeNode) -> Result<NodeId, SearchError> {
        if self.nodes.len() >= self.budget {
            return Err(SearchError::NodeBudgetExceeded {
                budget: self.budget,
            });
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        Ok(id)
    }

    /// Returns the node behind a handle.
    ///
    /// # Panics
    /// Panics if `id` does not refer to a live node (e.g. after
    /// [`clear`](Self::clear)).
    #[inline]
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0 as usize]
    }

    /// Returns the node behind a handle, mutably.
    ///
    /// # Panics
    /// Panics if `id` does not refer to a live node.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Returns the total number of allocations recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Releases every tracked node and resets the arena to empty.
    /// Calling it again without intervening allocations is a no-op.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}
