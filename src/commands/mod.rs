//! Command implementations for ripple

pub mod bfs;
pub mod components;
pub mod dispatch;
pub mod path;
pub mod show;

use ripple_core::error::Result;
use ripple_core::graph::Graph;

use crate::cli::GraphArgs;

/// Build the graph described by the shared CLI arguments.
pub(crate) fn build_graph(args: &GraphArgs) -> Result<Graph> {
    let mut graph = Graph::new(args.vertices);
    for &(u, v) in &args.edge {
        if args.directed {
            graph.add_arc(u, v)?;
        } else {
            graph.add_edge(u, v)?;
        }
    }
    Ok(graph)
}

/// Render a vertex-indexed optional column, `-` marking absent entries.
pub(crate) fn render_sentinel(values: &[Option<usize>]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.map_or_else(|| "-".to_string(), |x| x.to_string()))
        .collect()
}

/// Join vertex indices into a single space-separated line.
pub(crate) fn render_vertices(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
