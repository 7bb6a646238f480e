//! Arena-backed rooted tree for phylogenetic placement.
//!
//! Nodes are owned by a flat `Vec` and addressed by [`NodeId`] indices, with
//! parent and ordered child links stored per node. In-place mutation of the
//! shared tree becomes mutation of arena slots, which keeps parent
//! back-references cheap without cyclic ownership.

use std::collections::HashMap;

/// Index of a node in the owning [`Tree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single node of the tree together with its placement state.
///
/// `hits`, `scores`, `ntips`, `min_tip_dist` and `root_dist` are populated
/// progressively by the pipeline stages and hold their defaults until the
/// corresponding stage has run.
#[derive(Debug, Clone)]
pub struct Node {
    name: Option<String>,
    length: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Similarity scores attributed to this node, keyed by query name.
    pub hits: HashMap<String, Vec<f64>>,
    /// Per-query placement score, set by the metric calculator.
    pub scores: HashMap<String, f64>,
    /// Number of descendant tips (1 for a tip).
    pub ntips: usize,
    /// Minimum number of edges to any descendant tip (0 for a tip).
    pub min_tip_dist: usize,
    /// Number of edges from the root (0 for the root).
    pub root_dist: usize,
}

impl Node {
    fn new(name: Option<&str>, length: f64, parent: Option<NodeId>) -> Self {
        Self {
            name: name.map(str::to_string),
            length,
            parent,
            children: Vec::new(),
            hits: HashMap::new(),
            scores: HashMap::new(),
            ntips: 0,
            min_tip_dist: 0,
            root_dist: 0,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Branch length of the edge leading to this node.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_tip(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A rooted, ordered, multi-way tree.
///
/// The tree always has at least the root node. Structure is only extended
/// through [`Tree::append_child`], so every node except the root has exactly
/// one parent and the arena stays a single connected hierarchy.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Create a tree consisting of a single root node.
    pub fn new(root_name: Option<&str>) -> Self {
        Self {
            nodes: vec![Node::new(root_name, 0.0, None)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Append a new childless node under `parent` and return its id.
    pub fn append_child(&mut self, parent: NodeId, name: Option<&str>, length: f64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name, length, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of tips in the tree.
    pub fn tip_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_tip()).count()
    }

    /// Every node id in arena order. Nodes are never removed, so this visits
    /// the whole tree without committing to a traversal order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Left-to-right postorder: every child is listed before its parent, and
    /// sibling subtrees keep their insertion order.
    pub fn postorder(&self) -> Vec<NodeId> {
        let mut stack = vec![self.root];
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().copied());
        }
        order.reverse();
        order
    }

    /// Left-to-right preorder: every parent is listed before its children.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut stack = vec![self.root];
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        order
    }

    /// Tips in postorder.
    pub fn tips(&self) -> Vec<NodeId> {
        self.postorder()
            .into_iter()
            .filter(|&id| self.node(id).is_tip())
            .collect()
    }

    /// First node (in preorder) whose name matches, if any.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.preorder()
            .into_iter()
            .find(|&id| self.node(id).name() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // (((a,b)c,d)e,(f,g)h)root
    fn example_tree() -> Tree {
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

    fn names(tree: &Tree, order: &[NodeId]) -> Vec<String> {
        order
            .iter()
            .map(|&id| tree.node(id).name().unwrap().to_string())
            .collect()
    }

    #[test]
    fn postorder_visits_children_before_parents() {
        let tree = example_tree();
        let order = tree.postorder();
        assert_eq!(
            names(&tree, &order),
            ["a", "b", "c", "d", "e", "f", "g", "h", "root"]
        );
    }

    #[test]
    fn preorder_visits_parents_before_children() {
        let tree = example_tree();
        let order = tree.preorder();
        assert_eq!(
            names(&tree, &order),
            ["root", "e", "c", "a", "b", "d", "h", "f", "g"]
        );
    }

    #[test]
    fn tips_are_the_childless_nodes() {
        let tree = example_tree();
        assert_eq!(names(&tree, &tree.tips()), ["a", "b", "d", "f", "g"]);
        assert_eq!(tree.tip_count(), 5);
    }

    #[test]
    fn find_resolves_names() {
        let tree = example_tree();
        let c = tree.find("c").unwrap();
        assert_eq!(tree.node(c).name(), Some("c"));
        assert!(tree.find("nope").is_none());
    }

    #[test]
    fn append_child_links_both_directions() {
        let mut tree = example_tree();
        let h = tree.find("h").unwrap();
        let q = tree.append_child(h, Some("query"), 1.5);
        assert_eq!(tree.parent(q), Some(h));
        assert!(tree.children(h).contains(&q));
        assert!(tree.node(q).is_tip());
        assert_eq!(tree.node(q).length(), 1.5);
    }
}
