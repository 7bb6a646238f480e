use std::collections::BTreeMap;

use crate::placement::types::Placement;
use crate::tree::{Node, Tree};

/// Default branch-length policy: every grafted tip gets a length of 0.0.
pub fn default_length(_node: &Node, _query: &str, _score: f64) -> f64 {
    0.0
}

/// Graft a new tip for every placement at or above `threshold`.
///
/// `length_fn` is called as `length_fn(node, query_name, score)` to pick the
/// branch length of the new tip, which is appended as a child of the selected
/// node and named after the query. The new tip carries no hits or scores of
/// its own. Placements below the threshold are dropped without error.
pub fn insert<F>(
    tree: &mut Tree,
    placements: &BTreeMap<String, Placement>,
    threshold: f64,
    length_fn: F,
) where
    F: Fn(&Node, &str, f64) -> f64,
{
    for (query, placement) in placements {
        if placement.score >= threshold {
            let length = length_fn(tree.node(placement.node), query, placement.score);
            tree.append_child(placement.node, Some(query), length);
        }
    }
}
