//! Connected components command

use crate::cli::{Cli, GraphArgs, OutputFormat};
use ripple_core::error::Result;
use ripple_core::graph::{bfs_components, ComponentsResult};

/// Execute the components command
pub fn execute(cli: &Cli, args: &GraphArgs) -> Result<()> {
    let graph = super::build_graph(args)?;
    let result = ComponentsResult::new(bfs_components(&graph));

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => output_components_human(cli, &result),
    }

    Ok(())
}

fn output_components_human(cli: &Cli, result: &ComponentsResult) {
    for (index, component) in result.components.iter().enumerate() {
        println!(
            "component {}: {}",
            index + 1,
            super::render_vertices(component)
        );
    }
    if !cli.quiet {
        println!("{} components", result.count);
    }
}
