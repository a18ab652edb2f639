//! Shortest-path reconstruction from BFS parent pointers

use crate::error::{Result, RippleError};
use crate::graph::algos::bfs::bfs_traverse;
use crate::graph::types::PathResult;
use crate::graph::Graph;

/// Walk `parent` links backward from `end`, then reverse into start-to-end
/// order.
///
/// Returns the vertices from `start` to `end` inclusive, or an empty
/// vector when `end` is unreachable from `start`. The `parent` table must
/// come from a BFS rooted at `start`; with any other table the result is
/// unspecified, though never a panic or an unterminated walk.
pub fn reconstruct_path(
    start: usize,
    end: usize,
    parent: &[Option<usize>],
) -> Result<Vec<usize>> {
    let vertex_count = parent.len();
    if start >= vertex_count {
        return Err(RippleError::vertex_out_of_bounds(start, vertex_count));
    }
    if end >= vertex_count {
        return Err(RippleError::vertex_out_of_bounds(end, vertex_count));
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(predecessor) = parent[current] {
        // A table that was not produced by BFS could contain a cycle;
        // no valid path is longer than the table itself.
        if path.len() > vertex_count {
            return Ok(Vec::new());
        }
        path.push(predecessor);
        current = predecessor;
    }
    path.reverse();

    if path.first() == Some(&start) {
        Ok(path)
    } else {
        Ok(Vec::new())
    }
}

/// Find the shortest path (fewest edges) from `from` to `to`.
///
/// Runs a BFS from `from` and reconstructs the path from its parent
/// table. `path_length` counts edges, so a found path of one vertex
/// (`from == to`) has length 0.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn find_path(graph: &Graph, from: usize, to: usize) -> Result<PathResult> {
    let traversal = bfs_traverse(graph, from)?;
    let vertices = reconstruct_path(from, to, &traversal.parent)?;
    let found = !vertices.is_empty();

    Ok(PathResult {
        from,
        to,
        found,
        path_length: vertices.len().saturating_sub(1),
        vertices,
    })
}
