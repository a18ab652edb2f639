//! Command dispatch logic for ripple

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use ripple_core::error::{Result, RippleError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        None => Err(RippleError::UsageError(
            "no command given (see --help)".to_string(),
        )),

        Some(Commands::Show { graph }) => commands::show::execute(cli, graph),

        Some(Commands::Bfs {
            start: start_vertex,
            graph,
        }) => commands::bfs::execute(cli, graph, *start_vertex),

        Some(Commands::Components { graph }) => commands::components::execute(cli, graph),

        Some(Commands::Path { from, to, graph }) => {
            commands::path::execute(cli, graph, *from, *to)
        }
    };

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "run_command");
    }

    result
}
