use serde::{Deserialize, Serialize};

use crate::tree::NodeId;

/// A similarity-search result linking a query sequence to a reference tip.
///
/// Produced by an external parser of alignment/search output; consumed
/// verbatim by [`decorate`](crate::placement::decorate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Name of the reference tip the query matched.
    pub subject: String,
    /// Similarity score of the match.
    #[serde(alias = "identity")]
    pub seq_score: f64,
}

/// The winning node and score for a single query, as chosen by
/// [`best`](crate::placement::best).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Node the query should be grafted under.
    pub node: NodeId,
    /// Placement score of the query at that node.
    pub score: f64,
}
