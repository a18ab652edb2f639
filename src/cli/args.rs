//! Shared graph-description arguments

use clap::Args;

use crate::cli::parse::parse_edge;

/// Arguments describing the graph every subcommand operates on.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Number of vertices; vertices are indices 0..N
    #[arg(long, short = 'n', value_name = "N")]
    pub vertices: usize,

    /// Edge as `U,V` (repeatable; insertion order determines BFS tie-breaking)
    #[arg(
        long,
        short = 'e',
        value_name = "U,V",
        action = clap::ArgAction::Append,
        value_parser = parse_edge
    )]
    pub edge: Vec<(usize, usize)>,

    /// Insert directed arcs instead of bidirectional edges
    #[arg(long)]
    pub directed: bool,
}
