//! Core graph structure — vertices plus symmetric adjacency.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult, Vertex};

/// The core in-memory undirected graph owning a set of value-carrying
/// vertices.
///
/// Vertices are registered with [`add_vertex`](Self::add_vertex), which
/// assigns a sequential ID, and linked with [`add_edge`](Self::add_edge).
/// Every mutation that touches one endpoint of an edge touches the other in
/// the same call, so adjacency stays symmetric.
#[derive(Debug)]
pub struct ValueGraph<T> {
    /// All vertices, indexed by ID.
    vertices: HashMap<u64, Vertex<T>>,
    /// Next available vertex ID.
    next_id: u64,
}

impl<T> ValueGraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            next_id: 0,
        }
    }

    /// Create from pre-existing data (used by the builder).
    ///
    /// Vertices must already have IDs assigned; every edge endpoint must
    /// name one of them.
    pub fn from_parts(vertices: Vec<Vertex<T>>, edges: Vec<(u64, u64)>) -> GraphResult<Self> {
        let next_id = vertices.iter().map(|v| v.id + 1).max().unwrap_or(0);

        let mut graph = Self {
            vertices: HashMap::with_capacity(vertices.len()),
            next_id,
        };
        for vertex in vertices {
            graph.vertices.insert(vertex.id, vertex);
        }
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }

        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        // Each edge contributes to the degree of both endpoints.
        self.vertices.values().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether a vertex with this ID is registered.
    pub fn contains(&self, id: u64) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Get a vertex by ID (immutable).
    pub fn vertex(&self, id: u64) -> Option<&Vertex<T>> {
        self.vertices.get(&id)
    }

    /// Get a vertex by ID (mutable).
    pub fn vertex_mut(&mut self, id: u64) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(&id)
    }

    /// Iterate over all registered vertices, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.values()
    }

    /// Register a vertex, returns the assigned ID.
    ///
    /// The vertex is registered isolated; edges are formed only through
    /// [`add_edge`](Self::add_edge).
    pub fn add_vertex(&mut self, mut vertex: Vertex<T>) -> u64 {
        let id = self.next_id;
        vertex.id = id;
        vertex.adjacent.clear();
        self.next_id += 1;

        self.vertices.insert(id, vertex);
        log::trace!("added vertex {}", id);
        id
    }

    /// Register each vertex of a sequence, returning the assigned IDs in
    /// order. Equivalent to repeated [`add_vertex`](Self::add_vertex).
    pub fn add_vertices(&mut self, vertices: Vec<Vertex<T>>) -> Vec<u64> {
        vertices
            .into_iter()
            .map(|vertex| self.add_vertex(vertex))
            .collect()
    }

    /// Add an undirected edge between two registered vertices.
    ///
    /// Idempotent: adding an edge that already exists changes nothing.
    /// Fails without mutating anything if the endpoints are equal or either
    /// is unregistered.
    pub fn add_edge(&mut self, a: u64, b: u64) -> GraphResult<()> {
        // Validate: no self-loops
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }

        // Validate: both endpoints exist before touching either set
        if !self.vertices.contains_key(&a) {
            return Err(GraphError::VertexNotFound(a));
        }
        if !self.vertices.contains_key(&b) {
            return Err(GraphError::InvalidEdgeEndpoint(b));
        }

        if let Some(vertex) = self.vertices.get_mut(&a) {
            vertex.adjacent.insert(b);
        }
        if let Some(vertex) = self.vertices.get_mut(&b) {
            vertex.adjacent.insert(a);
        }
        log::trace!("added edge {} -- {}", a, b);

        Ok(())
    }

    /// Remove the edge between two registered vertices.
    ///
    /// No-op (not an error) if the edge does not exist.
    pub fn remove_edge(&mut self, a: u64, b: u64) -> GraphResult<()> {
        if !self.vertices.contains_key(&a) {
            return Err(GraphError::VertexNotFound(a));
        }
        if !self.vertices.contains_key(&b) {
            return Err(GraphError::InvalidEdgeEndpoint(b));
        }

        if let Some(vertex) = self.vertices.get_mut(&a) {
            vertex.adjacent.remove(&b);
        }
        if let Some(vertex) = self.vertices.get_mut(&b) {
            vertex.adjacent.remove(&a);
        }
        log::trace!("removed edge {} -- {}", a, b);

        Ok(())
    }

    /// Remove a vertex and every edge attached to it.
    ///
    /// Walks the removed vertex's adjacency set and scrubs its ID from each
    /// neighbor's set, then returns the removed vertex.
    pub fn remove_vertex(&mut self, id: u64) -> GraphResult<Vertex<T>> {
        let removed = self
            .vertices
            .remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;

        for neighbor_id in &removed.adjacent {
            if let Some(neighbor) = self.vertices.get_mut(neighbor_id) {
                neighbor.adjacent.remove(&id);
            }
        }
        log::trace!(
            "removed vertex {} and {} incident edges",
            id,
            removed.degree()
        );

        Ok(removed)
    }
}

impl<T> Default for ValueGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}
