//! Shortest path command

use crate::cli::{Cli, GraphArgs, OutputFormat};
use ripple_core::error::Result;
use ripple_core::graph::{find_path, PathResult};

/// Execute the path command
pub fn execute(cli: &Cli, args: &GraphArgs, from: usize, to: usize) -> Result<()> {
    let graph = super::build_graph(args)?;
    let result = find_path(&graph, from, to)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => output_path_human(&result),
    }

    Ok(())
}

fn output_path_human(result: &PathResult) {
    if !result.found {
        println!("no path from {} to {}", result.from, result.to);
        return;
    }

    let chain = result
        .vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    let edges = if result.path_length == 1 {
        "edge"
    } else {
        "edges"
    };
    println!("path: {} ({} {})", chain, result.path_length, edges);
}
