//! Connected-component discovery via repeated BFS

use std::collections::VecDeque;

use crate::graph::Graph;

/// Discover all connected components by restarting BFS from every
/// not-yet-visited vertex in increasing index order.
///
/// Visited state is shared across restarts, so every vertex lands in
/// exactly one component. Components are ordered by their root (the
/// smallest vertex they contain); vertices within a component appear in
/// BFS discovery order from that root. No level or parent data is
/// produced here.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs_components(graph: &Graph) -> Vec<Vec<usize>> {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut components = Vec::new();

    for root in 0..vertex_count {
        if visited[root] {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(root);
        visited[root] = true;

        while let Some(current) = queue.pop_front() {
            component.push(current);
            for &neighbor in graph.neighbor_slice(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(component);
    }

    tracing::debug!(components = components.len(), "bfs_components");

    components
}
