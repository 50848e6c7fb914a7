//! Graph plugin
//!
//! Directed adjacency-list graphs, traversed from node 0 by `bfs` and `dfs`.

mod adapter;
mod bfs;
mod dfs;

pub use adapter::{to_graph, GraphAdapter};
pub use bfs::{bfs, Bfs};
pub use dfs::{dfs, Dfs};

use crate::plugins::AlgorithmRegistry;

/// Register the graph adapter and traversals
pub fn register(registry: &mut AlgorithmRegistry) {
    registry.register_adapter(Box::new(GraphAdapter::new()));
    registry.register_algorithm(Box::new(Bfs));
    registry.register_algorithm(Box::new(Dfs));
}
