//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Single-source breadth-first traversal
//! - `components`: Connected-component discovery via repeated BFS
//! - `path`: Shortest-path reconstruction from parent pointers

pub mod bfs;
pub mod components;
pub mod path;

pub use bfs::bfs_traverse;
pub use components::bfs_components;
pub use path::{find_path, reconstruct_path};
