//! The placement pipeline: decorate, propagate, score, select, graft.
//!
//! Stages run strictly in that order and each mutates the shared tree in
//! place. [`place`] chains the whole pipeline with the default tie-break and
//! branch-length policies; the stage functions are public for callers that
//! need to swap a policy or stop midway.

mod best;
mod decorate;
mod insert;
mod propagate;
mod scoring;
mod topology;
mod types;

pub use best::{best, default_battle, exclude_root_battle};
pub use decorate::decorate;
pub use insert::{default_length, insert};
pub use propagate::{propagate, set_number_of_tips};
pub use scoring::{f1_measure, f2_measure, fhalf_measure, make_f_beta, score};
pub use topology::{set_distance_to_root, set_minimum_distance_to_tips};
pub use types::{Hit, Placement};

use std::collections::BTreeMap;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::tree::{Node, Tree};

/// Run the full placement pipeline over `tree`.
///
/// Hits below `decorate_threshold` are ignored at annotation time; queries
/// whose best score falls below `insert_threshold` are selected but not
/// grafted. Selection uses [`default_battle`] and grafting uses
/// [`default_length`]. Returns the placement selected for every query that
/// cleared the decoration threshold anywhere in the tree.
pub fn place<I, F>(
    tree: &mut Tree,
    hits: I,
    score_fn: F,
    decorate_threshold: f64,
    insert_threshold: f64,
) -> Result<BTreeMap<String, Placement>>
where
    I: IntoIterator<Item = (String, Vec<Hit>)>,
    F: Fn(&[f64], &[f64], &Node) -> f64,
{
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );

    progress.set_message("Decorating tips with query hits...");
    decorate(tree, hits, decorate_threshold)?;

    progress.set_message("Propagating hit evidence...");
    propagate(tree);

    progress.set_message("Scoring candidate nodes...");
    score(tree, score_fn);

    progress.set_message("Selecting placements...");
    let placements = best(tree, default_battle);

    progress.set_message("Grafting queries into the tree...");
    insert(tree, &placements, insert_threshold, default_length);

    let grafted = placements
        .values()
        .filter(|placement| placement.score >= insert_threshold)
        .count();
    progress.finish_with_message(format!(
        "Placed {} queries, grafted {}",
        placements.len(),
        grafted
    ));

    Ok(placements)
}
