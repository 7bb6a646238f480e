use thiserror::Error;

/// Result alias for placement operations.
pub type Result<T> = std::result::Result<T, PlacementError>;

/// Errors surfaced by the placement pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlacementError {
    /// A hit names a subject with no matching tip in the reference tree.
    ///
    /// Decoration aborts rather than silently skipping: a missing reference
    /// indicates the hits and the tree are out of sync.
    #[error("no tip named '{subject}' in the reference tree (query '{query}')")]
    MissingTip {
        /// Query the offending hit belongs to.
        query: String,
        /// Subject name that failed to resolve.
        subject: String,
    },
}
