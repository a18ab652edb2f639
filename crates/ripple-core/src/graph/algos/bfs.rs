//! Single-source breadth-first traversal

use std::collections::VecDeque;

use crate::error::{Result, RippleError};
use crate::graph::types::Traversal;
use crate::graph::Graph;

/// Perform a BFS traversal from `start`.
///
/// Vertices are discovered in order of increasing distance from `start`;
/// neighbors of equal distance are discovered in edge-insertion order.
/// Vertices unreachable from `start` keep `level = None`, `parent = None`
/// and are absent from the traversal order.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs_traverse(graph: &Graph, start: usize) -> Result<Traversal> {
    let vertex_count = graph.vertex_count();
    if start >= vertex_count {
        return Err(RippleError::vertex_out_of_bounds(start, vertex_count));
    }

    let mut visited = vec![false; vertex_count];
    let mut parent: Vec<Option<usize>> = vec![None; vertex_count];
    let mut level: Vec<Option<usize>> = vec![None; vertex_count];
    let mut order = Vec::new();

    let mut queue = VecDeque::new();
    queue.push_back(start);
    visited[start] = true;
    level[start] = Some(0);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &neighbor in graph.neighbor_slice(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                parent[neighbor] = Some(current);
                level[neighbor] = level[current].map(|l| l + 1);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs_traverse");

    Ok(Traversal {
        start,
        order,
        level,
        parent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RippleError;

    /// 8 vertices, edges 0-1, 0-2, 1-3, 2-4, 5-6, 6-7: two components.
    fn sample_graph() -> Graph {
        let mut g = Graph::new(8);
        for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 4), (5, 6), (6, 7)] {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn test_bfs_traverse_two_component_graph() {
        let g = sample_graph();
        let result = bfs_traverse(&g, 0).unwrap();

        assert_eq!(result.start, 0);
        assert_eq!(result.order, vec![0, 1, 2, 3, 4]);
        assert_eq!(
            result.level,
            vec![
                Some(0),
                Some(1),
                Some(1),
                Some(2),
                Some(2),
                None,
                None,
                None
            ]
        );
        assert_eq!(
            result.parent,
            vec![None, Some(0), Some(0), Some(1), Some(2), None, None, None]
        );
    }

    #[test]
    fn test_bfs_traverse_layering_invariants() {
        let g = sample_graph();
        let result = bfs_traverse(&g, 0).unwrap();

        // Order is duplicate-free and non-decreasing in level.
        let mut seen = vec![false; g.vertex_count()];
        let mut previous_level = 0;
        for &v in &result.order {
            assert!(!seen[v]);
            seen[v] = true;
            let level = result.level[v].unwrap();
            assert!(level >= previous_level);
            previous_level = level;
        }

        // Reached vertices appear in the order; unreached carry no level.
        for v in 0..g.vertex_count() {
            assert_eq!(result.level[v].is_some(), seen[v]);
            assert_eq!(result.parent[v].is_some(), seen[v] && v != result.start);
        }

        // Every non-source reached vertex sits one level below its parent,
        // and the parent was discovered first.
        for &v in &result.order {
            if let Some(p) = result.parent[v] {
                assert_eq!(result.level[v], result.level[p].map(|l| l + 1));
                let pos = |x| result.order.iter().position(|&o| o == x).unwrap();
                assert!(pos(p) < pos(v));
            }
        }
    }

    #[test]
    fn test_bfs_traverse_single_vertex() {
        let g = Graph::new(1);
        let result = bfs_traverse(&g, 0).unwrap();
        assert_eq!(result.order, vec![0]);
        assert_eq!(result.level, vec![Some(0)]);
        assert_eq!(result.parent, vec![None]);
    }

    #[test]
    fn test_bfs_traverse_directed_graph() {
        let mut g = Graph::new(3);
        g.add_arc(0, 1).unwrap();
        g.add_arc(1, 2).unwrap();

        let forward = bfs_traverse(&g, 0).unwrap();
        assert_eq!(forward.order, vec![0, 1, 2]);

        // Arcs are not walkable backwards.
        let backward = bfs_traverse(&g, 2).unwrap();
        assert_eq!(backward.order, vec![2]);
        assert_eq!(backward.level, vec![None, None, Some(0)]);
    }

    #[test]
    fn test_bfs_traverse_duplicate_edges_visit_once() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 1).unwrap();
        let result = bfs_traverse(&g, 0).unwrap();
        assert_eq!(result.order, vec![0, 1]);
    }

    #[test]
    fn test_bfs_traverse_start_out_of_bounds() {
        let g = Graph::new(3);
        let err = bfs_traverse(&g, 3).unwrap_err();
        assert!(matches!(err, RippleError::VertexOutOfBounds { .. }));
    }

    #[test]
    fn test_bfs_traverse_empty_graph_rejects_any_start() {
        let g = Graph::new(0);
        assert!(bfs_traverse(&g, 0).is_err());
    }
}
