use std::collections::BTreeMap;

use crate::placement::topology::{set_distance_to_root, set_minimum_distance_to_tips};
use crate::placement::types::Placement;
use crate::tree::{Node, Tree};

/// Default tie-break: the current node wins on a strictly greater score, or
/// on an exact score tie when it sits strictly nearer to a tip.
pub fn default_battle(
    current: &Node,
    existing: &Node,
    current_score: f64,
    existing_score: f64,
) -> bool {
    if current_score > existing_score {
        return true;
    }
    if current_score == existing_score {
        return current.min_tip_dist < existing.min_tip_dist;
    }
    false
}

/// Like [`default_battle`], but the root always loses. Useful when a query
/// spread across both sides of the root should not be grafted there.
pub fn exclude_root_battle(
    current: &Node,
    existing: &Node,
    current_score: f64,
    existing_score: f64,
) -> bool {
    if current.is_root() {
        return false;
    }
    default_battle(current, existing, current_score, existing_score)
}

/// Find the best-scoring node for every query.
///
/// Both topology metrics are recomputed on entry since `battle_fn` may read
/// them. Nodes are visited in left-to-right postorder; `battle_fn` is called
/// as `battle_fn(current_node, existing_node, current_score, existing_score)`
/// and a `true` result replaces the recorded best. With the default policy a
/// residual tie (equal score, equal `min_tip_dist`) keeps the first-visited
/// node: later postorder nodes do not win ties.
///
/// The result holds exactly one entry per query that had a score anywhere in
/// the tree.
pub fn best<F>(tree: &mut Tree, battle_fn: F) -> BTreeMap<String, Placement>
where
    F: Fn(&Node, &Node, f64, f64) -> bool,
{
    set_minimum_distance_to_tips(tree);
    set_distance_to_root(tree);

    let mut results: BTreeMap<String, Placement> = BTreeMap::new();

    for id in tree.postorder() {
        let node = tree.node(id);
        for (query, &candidate) in &node.scores {
            let replace = match results.get(query) {
                None => true,
                Some(existing) => {
                    battle_fn(node, tree.node(existing.node), candidate, existing.score)
                }
            };
            if replace {
                results.insert(
                    query.clone(),
                    Placement {
                        node: id,
                        score: candidate,
                    },
                );
            }
        }
    }

    results
}
