//! Graph storage and traversal operations
//!
//! Provides the adjacency-list graph and the algorithms that navigate it:
//! - BFS traversal with level and parent tracking
//! - Connected-component discovery via repeated BFS
//! - Shortest-path (fewest edges) reconstruction from parent pointers

pub mod adjacency;
pub mod algos;
pub mod types;

pub use adjacency::Graph;
pub use algos::{bfs_components, bfs_traverse, find_path, reconstruct_path};
pub use types::{ComponentsResult, PathResult, Traversal};
