//! Result types for graph traversal operations

use serde::Serialize;

/// Result of a single-source breadth-first traversal.
///
/// `level` and `parent` are indexed by vertex; `None` marks a vertex the
/// traversal never reached (and, for `parent`, the start vertex itself).
#[derive(Debug, Clone, Serialize)]
pub struct Traversal {
    /// Start vertex of the traversal
    pub start: usize,
    /// Vertices in BFS discovery order
    pub order: Vec<usize>,
    /// BFS distance from the start vertex, per vertex
    pub level: Vec<Option<usize>>,
    /// Vertex from which each vertex was first discovered
    pub parent: Vec<Option<usize>>,
}

/// Connected components of a graph, each in BFS discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentsResult {
    /// Number of components
    pub count: usize,
    /// Components ordered by their smallest vertex
    pub components: Vec<Vec<usize>>,
}

impl ComponentsResult {
    pub fn new(components: Vec<Vec<usize>>) -> Self {
        Self {
            count: components.len(),
            components,
        }
    }
}

/// Result of a shortest-path query between two vertices.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    /// Source vertex
    pub from: usize,
    /// Target vertex
    pub to: usize,
    /// Whether a path exists
    pub found: bool,
    /// Vertices from source to target inclusive; empty when not found
    pub vertices: Vec<usize>,
    /// Number of edges on the path (0 when not found)
    pub path_length: usize,
}
