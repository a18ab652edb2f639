//! CLI argument parsing for ripple
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};

pub use args::GraphArgs;
pub use ripple_core::format::OutputFormat;

/// Ripple - breadth-first graph traversal CLI
#[derive(Parser, Debug)]
#[command(name = "ripple")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or a directive like ripple_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency list of the graph
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Start vertex
        start: usize,

        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Discover connected components via repeated BFS
    Components {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Shortest path (fewest edges) between two vertices
    Path {
        /// Source vertex
        from: usize,

        /// Target vertex
        to: usize,

        #[command(flatten)]
        graph: GraphArgs,
    },
}
