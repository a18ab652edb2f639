//! BFS traversal command

use std::time::Instant;

use crate::cli::{Cli, GraphArgs, OutputFormat};
use ripple_core::error::Result;
use ripple_core::graph::{bfs_traverse, Traversal};

/// Execute the bfs command
pub fn execute(cli: &Cli, args: &GraphArgs, start: usize) -> Result<()> {
    let t0 = Instant::now();

    let graph = super::build_graph(args)?;
    let result = bfs_traverse(&graph, start)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?t0.elapsed(), visited = result.order.len(), "bfs");
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => output_bfs_human(cli, &result),
    }

    Ok(())
}

fn output_bfs_human(cli: &Cli, result: &Traversal) {
    println!("order: {}", super::render_vertices(&result.order));
    if cli.quiet {
        return;
    }

    let levels = super::render_sentinel(&result.level);
    let parents = super::render_sentinel(&result.parent);
    println!("vertex\tlevel\tparent");
    for vertex in 0..result.level.len() {
        println!("{}\t{}\t{}", vertex, levels[vertex], parents[vertex]);
    }
}
