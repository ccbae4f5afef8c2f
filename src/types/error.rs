//! Error types for the ugraph library.

use thiserror::Error;

/// All errors that can occur in the ugraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not found by ID.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(u64),

    /// Edge references a vertex that is not registered in the graph.
    #[error("Edge references unregistered vertex ID: {0}")]
    InvalidEdgeEndpoint(u64),

    /// Self-loop not allowed.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(u64),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
