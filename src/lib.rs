//! ugraph — in-memory undirected graph with value-carrying vertices.
//!
//! Vertices hold caller-supplied values and a symmetric adjacency set; the
//! graph exposes mutation (add/remove vertex, add/remove edge) and three
//! queries: depth-first search, breadth-first search, and shortest-path
//! distance between two vertices.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    breadth_first_search, depth_first_search, shortest_path_distance, GraphBuilder, ValueGraph,
};
pub use types::{GraphError, GraphResult, Vertex};
