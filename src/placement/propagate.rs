use std::mem;

use crate::tree::Tree;

/// Propagate tip hits up to every ancestor.
///
/// Postorder guarantees each child's `hits` is final before its parent reads
/// it. For every internal node the children's per-query score collections are
/// concatenated onto the node's own, so after propagation a node's `hits` for
/// a query is the multiset union over all of its descendant tips, and the
/// root holds the global scores for each query.
///
/// The tree is modified in place and returned for chaining.
pub fn propagate(tree: &mut Tree) -> &mut Tree {
    for id in tree.postorder() {
        if tree.node(id).is_tip() {
            continue;
        }

        let mut merged = mem::take(&mut tree.node_mut(id).hits);
        for &child in tree.children(id) {
            for (query, values) in &tree.node(child).hits {
                merged
                    .entry(query.clone())
                    .or_default()
                    .extend_from_slice(values);
            }
        }
        tree.node_mut(id).hits = merged;
    }

    tree
}

/// Set `ntips` on every node: 1 for a tip, the sum of the children otherwise.
pub fn set_number_of_tips(tree: &mut Tree) -> &mut Tree {
    for id in tree.postorder() {
        let ntips = if tree.node(id).is_tip() {
            1
        } else {
            tree.children(id)
                .iter()
                .map(|&child| tree.node(child).ntips)
                .sum()
        };
        tree.node_mut(id).ntips = ntips;
    }

    tree
}
