use thiserror::Error;

/// Top-level error type for the Crossway road-network core.
#[derive(Debug, Error)]
pub enum CrosswayError {
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors related to road-graph construction.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The ring-closing vertex of a polygon could not be matched to an
    /// already-registered point. The first vertex was registered when the
    /// ring started, so a miss means point resolution is inconsistent
    /// within one registry lifetime.
    #[error("ring-closing vertex at ({x}, {z}) resolves to no registered point")]
    UnresolvedRingClosure { x: f64, z: f64 },
}

/// Convenience type alias for results using [`CrosswayError`].
pub type Result<T> = std::result::Result<T, CrosswayError>;
