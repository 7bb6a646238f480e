#![allow(dead_code)]

use std::collections::HashMap;

use phylograft::{Hit, Node, Tree};

/// The worked example tree: (((a,b)c,d)e,(f,g)h)root
pub fn example_tree() -> Tree {
    let mut tree = Tree::new(Some("root"));
    let root = tree.root();
    let e = tree.append_child(root, Some("e"), 0.0);
    let c = tree.append_child(e, Some("c"), 0.0);
    tree.append_child(c, Some("a"), 0.0);
    tree.append_child(c, Some("b"), 0.0);
    tree.append_child(e, Some("d"), 0.0);
    let h = tree.append_child(root, Some("h"), 0.0);
    tree.append_child(h, Some("f"), 0.0);
    tree.append_child(h, Some("g"), 0.0);
    tree
}

pub fn hit(subject: &str, seq_score: f64) -> Hit {
    Hit {
        subject: subject.to_string(),
        seq_score,
    }
}

pub fn example_hits() -> Vec<(String, Vec<Hit>)> {
    vec![
        (
            "query1".to_string(),
            vec![hit("a", 95.6), hit("d", 10.7), hit("f", 15.7)],
        ),
        (
            "query2".to_string(),
            vec![hit("f", 90.6), hit("g", 12.7)],
        ),
    ]
}

/// Scoring function used throughout the selector tests: the number of local
/// scores at the node.
pub fn count_local(_global: &[f64], local: &[f64], _node: &Node) -> f64 {
    local.len() as f64
}

pub fn hits_of<'a>(tree: &'a Tree, name: &str) -> &'a HashMap<String, Vec<f64>> {
    &tree.node(tree.find(name).unwrap()).hits
}

pub fn scores_of<'a>(tree: &'a Tree, name: &str) -> &'a HashMap<String, f64> {
    &tree.node(tree.find(name).unwrap()).scores
}
