//! Minimax with alpha-beta pruning over an implicit complete binary tree.
//!
//! The tree is never materialized: the leaves are a flat array, and a node is
//! just an index paired with a depth. The children of node `i` on the next
//! level are `i * 2` and `i * 2 + 1`.

use log::debug;

/// Sentinel bounds standing in for minus/plus infinity.
pub const MIN: i32 = -1000;
pub const MAX: i32 = 1000;

/// Depth of the demo tree. A complete binary tree of this depth has
/// [`N_LEAVES`] leaves.
pub const TREE_DEPTH: usize = 3;
pub const N_LEAVES: usize = 1 << TREE_DEPTH;

/// Searches a fixed-depth binary tree given by its leaf values.
///
/// Pruning can be switched off to get plain exhaustive minimax over the same
/// code path; together with the leaf counter that shows how many evaluations
/// the cutoffs save.
pub struct TreeSearch {
    /// A performance counter. If we prune well, this number is small
    pub n_leafs_evaluated: usize,
    pruning: bool,
}

impl TreeSearch {
    pub fn new() -> Self {
        Self {
            n_leafs_evaluated: 0,
            pruning: true,
        }
    }

    pub fn without_pruning() -> Self {
        Self {
            n_leafs_evaluated: 0,
            pruning: false,
        }
    }

    /// Value of the root under optimal play by both sides. The root is a
    /// maximizing node.
    pub fn optimal_value(&mut self, values: &[i32; N_LEAVES]) -> i32 {
        self.minimax(0, 0, true, values, MIN, MAX)
    }

    /// `alpha` is the best value the maximizer can already guarantee on the
    /// path to this node, `beta` the minimizer's counterpart. A branch is
    /// abandoned once `beta <= alpha`, after both bounds have been updated
    /// with this branch's best-so-far, so the skipped siblings can no longer
    /// influence the root.
    fn minimax(
        &mut self,
        depth: usize,
        node_index: usize,
        maximizing: bool,
        values: &[i32; N_LEAVES],
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == TREE_DEPTH {
            self.n_leafs_evaluated += 1;
            return values[node_index];
        }
        if maximizing {
            let mut best = MIN;
            for i in 0..2 {
                let val = self.minimax(depth + 1, node_index * 2 + i, false, values, alpha, beta);
                best = best.max(val);
                alpha = alpha.max(best);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = MAX;
            for i in 0..2 {
                let val = self.minimax(depth + 1, node_index * 2 + i, true, values, alpha, beta);
                best = best.min(val);
                beta = beta.min(best);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for TreeSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TreeSearch {
    fn drop(&mut self) {
        debug!("TreeSearch evaluated {} leaf nodes", self.n_leafs_evaluated);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sample_tree_evaluates_to_five() {
        let values = [3, 5, 6, 9, 1, 2, 0, -1];
        assert_eq!(TreeSearch::new().optimal_value(&values), 5);
    }

    #[test]
    fn exhaustive_search_touches_every_leaf() {
        let values = [3, 5, 6, 9, 1, 2, 0, -1];
        let mut search = TreeSearch::without_pruning();
        assert_eq!(search.optimal_value(&values), 5);
        assert_eq!(search.n_leafs_evaluated, N_LEAVES);
    }
}
