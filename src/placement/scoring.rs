use std::collections::HashMap;

use crate::placement::propagate::set_number_of_tips;
use crate::tree::{Node, Tree};

/// Compute a placement score for every `(node, query)` pair.
///
/// Requires a propagated tree (see [`propagate`](crate::placement::propagate));
/// the root's aggregated `hits` serve as the global scores per query.
///
/// `score_fn` is invoked as `score_fn(global_scores, local_scores, node)` and
/// must be a pure function of its arguments. It may read `ntips` and the
/// other topology fields already set on the node. A query absent from a
/// node's `hits` gets no `scores` entry, so `score_fn` never sees an empty
/// local collection.
///
/// The tree is modified in place and returned for chaining.
pub fn score<'t, F>(tree: &'t mut Tree, score_fn: F) -> &'t mut Tree
where
    F: Fn(&[f64], &[f64], &Node) -> f64,
{
    set_number_of_tips(tree);

    // Root has all that we need.
    let global = tree.node(tree.root()).hits.clone();

    for id in tree.preorder() {
        let node = tree.node(id);
        let mut scores = HashMap::with_capacity(node.hits.len());
        for (query, local) in &node.hits {
            let value = score_fn(global[query.as_str()].as_slice(), local.as_slice(), node);
            scores.insert(query.clone(), value);
        }
        tree.node_mut(id).scores = scores;
    }

    tree
}

fn f_beta(beta_2: f64, global: &[f64], local: &[f64], node: &Node) -> f64 {
    // Pseudo-precision over hit counts, not a true probability; duplicate
    // hits against one node push it past 1.
    let p = global.len() as f64 / local.len() as f64;
    let r = local.len() as f64 / node.ntips as f64;

    (1.0 + beta_2) * (p * r) / ((beta_2 * p) + r)
}

/// Build an F-beta scoring function.
///
/// A beta of 1 gives the F1-score or F-measure.
pub fn make_f_beta(beta: f64) -> impl Fn(&[f64], &[f64], &Node) -> f64 {
    let beta_2 = beta * beta;
    move |global, local, node| f_beta(beta_2, global, local, node)
}

/// F1 measure (beta = 1).
pub fn f1_measure(global: &[f64], local: &[f64], node: &Node) -> f64 {
    f_beta(1.0, global, local, node)
}

/// F0.5 measure, weighting precision over recall.
pub fn fhalf_measure(global: &[f64], local: &[f64], node: &Node) -> f64 {
    f_beta(0.25, global, local, node)
}

/// F2 measure, weighting recall over precision.
pub fn f2_measure(global: &[f64], local: &[f64], node: &Node) -> f64 {
    f_beta(4.0, global, local, node)
}
