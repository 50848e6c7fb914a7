//! Graph adapter: JSON to an adjacency list

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, span, warn, Level};

use crate::core::{Adapter, GraphNode, Result, Structure, StructureKind, TraceError};

/// Edge-list payload: `{"nodes": [1, 2], "edges": [[0, 1]]}`
#[derive(Debug, Deserialize)]
struct EdgeListPayload {
    nodes: Vec<f64>,
    edges: Vec<(usize, usize)>,
}

/// Parse a graph from JSON
///
/// Two shapes are accepted:
///
/// - an edge list, `{"nodes": [values], "edges": [[from, to], ...]}`, where
///   each edge becomes a directed connection in listed order
/// - an adjacency list, `[{"value": v, "connections": [..]}, ...]`
///
/// Fails with [`TraceError::MalformedInput`] if the payload is not valid
/// JSON, has neither shape, or references a node that does not exist. No
/// partial graph is ever returned.
///
/// ```rust
/// use algotrace::plugins::graph::to_graph;
///
/// let graph = to_graph(r#"{"nodes": [1, 2], "edges": [[0, 1]]}"#).unwrap();
/// assert_eq!(graph[0].connections, vec![1]);
/// assert!(to_graph(r#"{"nodes": [1, 2]}"#).is_err());
/// ```
pub fn to_graph(raw: &str) -> Result<Vec<GraphNode>> {
    let parse_span = span!(Level::DEBUG, "to_graph", input_len = raw.len());
    let _enter = parse_span.enter();

    let value: Value = serde_json::from_str(raw).map_err(malformed)?;
    let nodes = match value {
        Value::Object(_) => {
            let payload: EdgeListPayload = serde_json::from_value(value).map_err(malformed)?;
            from_edge_list(payload)?
        }
        Value::Array(_) => serde_json::from_value::<Vec<GraphNode>>(value).map_err(malformed)?,
        other => {
            return Err(TraceError::malformed(
                StructureKind::Graph,
                format!("expected an object or array, found {}", json_type(&other)),
            ))
        }
    };

    check_connections(&nodes)?;
    if nodes.iter().any(|node| !node.value.is_finite()) {
        return Err(TraceError::malformed(
            StructureKind::Graph,
            "node values must be finite numbers",
        ));
    }

    debug!(
        nodes = nodes.len(),
        edges = nodes.iter().map(|n| n.connections.len()).sum::<usize>(),
        "Parsed graph"
    );
    Ok(nodes)
}

fn from_edge_list(payload: EdgeListPayload) -> Result<Vec<GraphNode>> {
    let mut nodes: Vec<GraphNode> = payload.nodes.into_iter().map(GraphNode::new).collect();
    let len = nodes.len();
    for (from, to) in payload.edges {
        if from >= len || to >= len {
            return Err(out_of_range(from.max(to), len));
        }
        nodes[from].connections.push(to);
    }
    Ok(nodes)
}

fn check_connections(nodes: &[GraphNode]) -> Result<()> {
    let len = nodes.len();
    match nodes
        .iter()
        .flat_map(|node| node.connections.iter().copied())
        .find(|&target| target >= len)
    {
        Some(target) => Err(out_of_range(target, len)),
        None => Ok(()),
    }
}

fn out_of_range(index: usize, len: usize) -> TraceError {
    warn!(index, len, "Graph edge references a missing node");
    TraceError::malformed(
        StructureKind::Graph,
        format!("edge references node {} but only {} nodes exist", index, len),
    )
}

fn malformed(error: serde_json::Error) -> TraceError {
    TraceError::malformed(StructureKind::Graph, error.to_string())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Adapter for [`StructureKind::Graph`]
pub struct GraphAdapter;

impl GraphAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GraphAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for GraphAdapter {
    fn kind(&self) -> StructureKind {
        StructureKind::Graph
    }

    fn adapt(&self, raw: &str) -> Result<Structure> {
        to_graph(raw).map(Structure::Graph)
    }

    fn name(&self) -> &'static str {
        "graph"
    }
}
