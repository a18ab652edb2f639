//! Adjacency dump command

use crate::cli::{Cli, GraphArgs, OutputFormat};
use ripple_core::error::Result;
use ripple_core::graph::Graph;

/// Execute the show command
pub fn execute(cli: &Cli, args: &GraphArgs) -> Result<()> {
    let graph = super::build_graph(args)?;

    match cli.format {
        OutputFormat::Json => output_show_json(&graph)?,
        OutputFormat::Human => {
            // The diagnostic dump format is part of the external surface;
            // print it verbatim.
            print!("{graph}");
        }
    }

    Ok(())
}

fn output_show_json(graph: &Graph) -> Result<()> {
    let value = serde_json::json!({
        "vertex_count": graph.vertex_count(),
        "edge_count": graph.edge_count(),
        "adjacency": graph.adjacency_lists(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
