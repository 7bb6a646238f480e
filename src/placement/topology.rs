//! Structural distances used by the default tie-break.
//!
//! Both metrics are independent of hit and score state, and are recomputed by
//! [`best`](crate::placement::best) on entry so grafts from a previous round
//! are accounted for.

use crate::tree::Tree;

/// Set `min_tip_dist` on every node: the minimum number of edges to any
/// descendant tip (0 for a tip).
pub fn set_minimum_distance_to_tips(tree: &mut Tree) -> &mut Tree {
    for id in tree.postorder() {
        let dist = match tree
            .children(id)
            .iter()
            .map(|&child| tree.node(child).min_tip_dist)
            .min()
        {
            Some(nearest) => nearest + 1,
            None => 0,
        };
        tree.node_mut(id).min_tip_dist = dist;
    }

    tree
}

/// Set `root_dist` on every node: the number of edges from the root (0 for
/// the root itself). Preorder guarantees the parent is final first.
pub fn set_distance_to_root(tree: &mut Tree) -> &mut Tree {
    for id in tree.preorder() {
        let dist = match tree.parent(id) {
            Some(parent) => tree.node(parent).root_dist + 1,
            None => 0,
        };
        tree.node_mut(id).root_dist = dist;
    }

    tree
}
