//! Serializable placement results.
//!
//! Converts the selector's output into flat records and writes them as TSV
//! or JSON. Writers take any `io::Write` sink; opening files is the caller's
//! business.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::placement::Placement;
use crate::tree::Tree;

/// One query's outcome, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub query: String,
    /// Name of the selected node, or `#<index>` for unnamed internal nodes.
    pub node: String,
    pub score: f64,
    /// Whether the score cleared the insertion threshold.
    pub grafted: bool,
}

/// A full placement run, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementExport {
    pub insert_threshold: f64,
    pub placements: Vec<PlacementRecord>,
}

impl PlacementExport {
    /// Flatten `best()`'s output against the tree it was computed on.
    pub fn from_placements(
        tree: &Tree,
        placements: &BTreeMap<String, Placement>,
        insert_threshold: f64,
    ) -> Self {
        let placements = placements
            .iter()
            .map(|(query, placement)| {
                let node = tree.node(placement.node);
                let node = match node.name() {
                    Some(name) => name.to_string(),
                    None => format!("#{}", placement.node.index()),
                };
                PlacementRecord {
                    query: query.clone(),
                    node,
                    score: placement.score,
                    grafted: placement.score >= insert_threshold,
                }
            })
            .collect();

        Self {
            insert_threshold,
            placements,
        }
    }
}

/// Write one tab-separated row per query, with a header.
pub fn write_tsv<W: Write>(writer: &mut W, export: &PlacementExport) -> std::io::Result<()> {
    writeln!(writer, "Query\tNode\tScore\tGrafted")?;
    for record in &export.placements {
        writeln!(
            writer,
            "{}\t{}\t{:.4}\t{}",
            record.query, record.node, record.score, record.grafted
        )?;
    }
    Ok(())
}

/// Write the export as pretty-printed JSON.
pub fn write_json<W: Write>(writer: &mut W, export: &PlacementExport) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, export)
}
