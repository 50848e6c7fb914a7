//! Depth-first search trace

use crate::core::{
    format_value, Algorithm, GraphNode, Result, Step, Structure, StructureKind, Trace,
    TraceParams, TraceRecorder,
};
use crate::plugins::graph_nodes;
use tracing::{debug, span, Level};

const NAME: &str = "dfs";

/// Depth-first traversal from node 0
pub struct Dfs;

impl Algorithm for Dfs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn structure(&self) -> StructureKind {
        StructureKind::Graph
    }

    fn summary(&self) -> &'static str {
        "Follow each branch as deep as it goes from node 0"
    }

    fn trace(&self, structure: &Structure, _params: &TraceParams) -> Result<Trace> {
        let nodes = graph_nodes(structure, NAME)?;
        Ok(dfs(nodes))
    }
}

/// A node being explored and the position of its next unexamined edge
struct Frame {
    node: usize,
    next_edge: usize,
}

/// Trace a depth-first search starting at node 0
///
/// Runs on an explicit frame stack so long chains cannot overflow the call
/// stack. Each frame resumes its adjacency list where it left off, giving
/// the same order as the recursive walk: a neighbour is checked for a visit
/// only after every earlier neighbour's subtree is finished.
pub fn dfs(nodes: &[GraphNode]) -> Trace {
    let search_span = span!(Level::DEBUG, "dfs", nodes = nodes.len());
    let _enter = search_span.enter();

    let mut recorder = TraceRecorder::new(StructureKind::Graph, NAME, nodes.len());
    if nodes.is_empty() {
        return recorder.finish();
    }

    let mut visited: Vec<usize> = Vec::with_capacity(nodes.len());
    let mut seen = vec![false; nodes.len()];
    let mut stack = Vec::new();

    enter(0, nodes, &mut visited, &mut seen, &mut recorder);
    stack.push(Frame {
        node: 0,
        next_edge: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let Some(&neighbor) = nodes[node].connections.get(frame.next_edge) else {
            stack.pop();
            continue;
        };
        frame.next_edge += 1;

        if seen[neighbor] {
            continue;
        }
        recorder.record(
            Step::new(format!(
                "Exploring neighbor {}",
                format_value(nodes[neighbor].value)
            ))
            .active([node])
            .highlighted(visited.iter().copied())
            .comparing([neighbor]),
        );
        enter(neighbor, nodes, &mut visited, &mut seen, &mut recorder);
        stack.push(Frame {
            node: neighbor,
            next_edge: 0,
        });
    }

    debug!(visited = visited.len(), steps = recorder.len(), "DFS trace built");
    recorder.finish()
}

fn enter(
    node: usize,
    nodes: &[GraphNode],
    visited: &mut Vec<usize>,
    seen: &mut [bool],
    recorder: &mut TraceRecorder,
) {
    recorder.record(
        Step::new(format!("Visiting node {}", format_value(nodes[node].value)))
            .active([node])
            .highlighted(visited.iter().copied()),
    );
    seen[node] = true;
    visited.push(node);
}
