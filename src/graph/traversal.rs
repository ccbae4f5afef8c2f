//! Graph traversal algorithms (DFS, BFS, shortest path).

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult};

use super::ValueGraph;

/// DFS pre-order traversal from a starting vertex.
///
/// Returns the values of every vertex reachable from `start_id`, each
/// exactly once. The order in which neighbors are explored follows the
/// adjacency set's iteration order and is not part of the contract.
///
/// A start vertex with no neighbors resolves to the singleton `[value]`.
pub fn depth_first_search<T: Clone>(
    graph: &ValueGraph<T>,
    start_id: u64,
) -> GraphResult<Vec<T>> {
    let start = graph
        .vertex(start_id)
        .ok_or(GraphError::VertexNotFound(start_id))?;

    if start.degree() == 0 {
        return Ok(vec![start.value.clone()]);
    }

    // Explicit stack instead of recursion: reachable depth is bounded only
    // by the graph size.
    let mut visited: HashSet<u64> = HashSet::new();
    let mut result: Vec<T> = Vec::new();
    let mut stack: Vec<u64> = vec![start_id];
    visited.insert(start_id);

    while let Some(current_id) = stack.pop() {
        if let Some(vertex) = graph.vertex(current_id) {
            result.push(vertex.value.clone());
            for neighbor_id in vertex.neighbors() {
                if visited.insert(neighbor_id) {
                    stack.push(neighbor_id);
                }
            }
        }
    }

    log::debug!("dfs from {} visited {} vertices", start_id, result.len());
    Ok(result)
}

/// BFS layer-order traversal from a starting vertex.
///
/// Returns the values of every vertex reachable from `start_id`, each
/// exactly once, in non-decreasing distance from the start.
///
/// A start vertex with no neighbors resolves to the singleton `[value]`.
pub fn breadth_first_search<T: Clone>(
    graph: &ValueGraph<T>,
    start_id: u64,
) -> GraphResult<Vec<T>> {
    let start = graph
        .vertex(start_id)
        .ok_or(GraphError::VertexNotFound(start_id))?;

    if start.degree() == 0 {
        return Ok(vec![start.value.clone()]);
    }

    let mut visited: HashSet<u64> = HashSet::new();
    let mut result: Vec<T> = Vec::new();
    let mut queue: VecDeque<u64> = VecDeque::new();

    visited.insert(start_id);
    queue.push_back(start_id);

    while let Some(current_id) = queue.pop_front() {
        if let Some(vertex) = graph.vertex(current_id) {
            result.push(vertex.value.clone());
            for neighbor_id in vertex.neighbors() {
                if visited.insert(neighbor_id) {
                    queue.push_back(neighbor_id);
                }
            }
        }
    }

    log::debug!("bfs from {} visited {} vertices", start_id, result.len());
    Ok(result)
}

/// Shortest-path distance (number of edges) between two vertices.
///
/// The end vertex is matched by value, not by ID: two distinct vertices
/// carrying equal values are the same destination, so equal start and end
/// values yield `Some(0)` even when the IDs differ. Unweighted shortest
/// distance is computed by BFS; `None` is the unreachable signal.
pub fn shortest_path_distance<T: PartialEq>(
    graph: &ValueGraph<T>,
    start_id: u64,
    end_id: u64,
) -> GraphResult<Option<u64>> {
    let start = graph
        .vertex(start_id)
        .ok_or(GraphError::VertexNotFound(start_id))?;
    let end = graph
        .vertex(end_id)
        .ok_or(GraphError::VertexNotFound(end_id))?;

    if start.value == end.value {
        return Ok(Some(0));
    }

    let mut visited: HashSet<u64> = HashSet::new();
    let mut queue: VecDeque<(u64, u64)> = VecDeque::new();

    visited.insert(start_id);
    queue.push_back((start_id, 0));

    while let Some((current_id, distance)) = queue.pop_front() {
        let vertex = match graph.vertex(current_id) {
            Some(vertex) => vertex,
            None => continue,
        };

        if vertex.value == end.value {
            log::debug!(
                "shortest path {} -> {} found at distance {}",
                start_id,
                end_id,
                distance
            );
            return Ok(Some(distance));
        }

        for neighbor_id in vertex.neighbors() {
            if visited.insert(neighbor_id) {
                queue.push_back((neighbor_id, distance + 1));
            }
        }
    }

    log::debug!("no path {} -> {}", start_id, end_id);
    Ok(None)
}

impl<T> ValueGraph<T> {
    /// See [`depth_first_search`].
    pub fn depth_first_search(&self, start_id: u64) -> GraphResult<Vec<T>>
    where
        T: Clone,
    {
        depth_first_search(self, start_id)
    }

    /// See [`breadth_first_search`].
    pub fn breadth_first_search(&self, start_id: u64) -> GraphResult<Vec<T>>
    where
        T: Clone,
    {
        breadth_first_search(self, start_id)
    }

    /// See [`shortest_path_distance`].
    pub fn shortest_path_distance(&self, start_id: u64, end_id: u64) -> GraphResult<Option<u64>>
    where
        T: PartialEq,
    {
        shortest_path_distance(self, start_id, end_id)
    }
}
