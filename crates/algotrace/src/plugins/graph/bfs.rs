//! Breadth-first search trace

use std::collections::VecDeque;

use crate::core::{
    format_value, Algorithm, GraphNode, Result, Step, Structure, StructureKind, Trace,
    TraceParams, TraceRecorder,
};
use crate::plugins::graph_nodes;
use tracing::{debug, span, trace, Level};

const NAME: &str = "bfs";

/// Queue-based traversal from node 0
pub struct Bfs;

impl Algorithm for Bfs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn structure(&self) -> StructureKind {
        StructureKind::Graph
    }

    fn summary(&self) -> &'static str {
        "Visit nodes level by level from node 0"
    }

    fn trace(&self, structure: &Structure, _params: &TraceParams) -> Result<Trace> {
        let nodes = graph_nodes(structure, NAME)?;
        Ok(bfs(nodes))
    }
}

/// Trace a breadth-first search starting at node 0
///
/// A node can sit in the queue more than once when two visited nodes both
/// discover it before it is dequeued; the later copies are dropped silently.
/// Visit steps highlight the nodes visited before this one.
pub fn bfs(nodes: &[GraphNode]) -> Trace {
    let search_span = span!(Level::DEBUG, "bfs", nodes = nodes.len());
    let _enter = search_span.enter();

    let mut recorder = TraceRecorder::new(StructureKind::Graph, NAME, nodes.len());
    if nodes.is_empty() {
        return recorder.finish();
    }

    let mut visited: Vec<usize> = Vec::with_capacity(nodes.len());
    let mut seen = vec![false; nodes.len()];
    let mut queue = VecDeque::from([0usize]);

    while let Some(node) = queue.pop_front() {
        if seen[node] {
            trace!(node, "Skipping already visited node");
            continue;
        }

        recorder.record(
            Step::new(format!("Visiting node {}", format_value(nodes[node].value)))
                .active([node])
                .highlighted(visited.iter().copied()),
        );
        seen[node] = true;
        visited.push(node);

        for &neighbor in &nodes[node].connections {
            if seen[neighbor] {
                continue;
            }
            queue.push_back(neighbor);
            recorder.record(
                Step::new(format!(
                    "Adding neighbor {} to queue",
                    format_value(nodes[neighbor].value)
                ))
                .active([node])
                .highlighted(visited.iter().copied())
                .comparing([neighbor]),
            );
        }
    }

    debug!(visited = visited.len(), steps = recorder.len(), "BFS trace built");
    recorder.finish()
}
