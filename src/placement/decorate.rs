use std::collections::HashMap;

use crate::error::{PlacementError, Result};
use crate::placement::types::Hit;
use crate::tree::{NodeId, Tree};

/// Decorate hit details onto the tips of the tree.
///
/// Every node's `hits` is reset to empty; for each `(query, hits)` pair the
/// subject tip is resolved by name and the score appended to that tip's
/// `hits` entry for the query, provided it clears `threshold`. Hits below the
/// threshold are silently dropped. Internal nodes stay empty until
/// [`propagate`](crate::placement::propagate) runs.
///
/// The subject is resolved before the threshold check, so a subject that
/// names no tip fails with [`PlacementError::MissingTip`] even when its score
/// would have been filtered.
///
/// The tree is modified in place and returned for chaining.
pub fn decorate<'t, I>(tree: &'t mut Tree, hits: I, threshold: f64) -> Result<&'t mut Tree>
where
    I: IntoIterator<Item = (String, Vec<Hit>)>,
{
    for id in tree.node_ids() {
        tree.node_mut(id).hits.clear();
    }

    // Tip names are unique, so a flat index is enough for subject lookup.
    let tip_index: HashMap<String, NodeId> = tree
        .tips()
        .into_iter()
        .filter_map(|id| tree.node(id).name().map(|name| (name.to_string(), id)))
        .collect();

    for (query, details) in hits {
        for hit in &details {
            let tip = *tip_index
                .get(hit.subject.as_str())
                .ok_or_else(|| PlacementError::MissingTip {
                    query: query.clone(),
                    subject: hit.subject.clone(),
                })?;

            if hit.seq_score >= threshold {
                tree.node_mut(tip)
                    .hits
                    .entry(query.clone())
                    .or_default()
                    .push(hit.seq_score);
            }
        }
    }

    Ok(tree)
}
