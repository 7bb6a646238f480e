pub mod error;
pub mod placement;
pub mod report;
pub mod tree;

// Re-export main API
pub use error::{PlacementError, Result};
pub use placement::{
    best, decorate, default_battle, default_length, exclude_root_battle, f1_measure, f2_measure,
    fhalf_measure, insert, make_f_beta, place, propagate, score, set_distance_to_root,
    set_minimum_distance_to_tips, set_number_of_tips, Hit, Placement,
};
pub use tree::{Node, NodeId, Tree};
