//! Structure kinds and the normalized shapes the algorithms consume
//!
//! Every structure is stored as a flat, index-addressed sequence. Linked lists
//! link index `i` to `i + 1`, trees place the children of `i` at `2i + 1` and
//! `2i + 2`, and graphs carry an explicit adjacency list per node.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TraceError;

/// The four supported structure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureKind {
    Array,
    LinkedList,
    Tree,
    Graph,
}

impl StructureKind {
    /// Returns true if the kind is backed by a flat value sequence that can be
    /// edited with insert/delete
    pub fn is_flat(&self) -> bool {
        !matches!(self, StructureKind::Graph)
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKind::Array => write!(f, "array"),
            StructureKind::LinkedList => write!(f, "linked-list"),
            StructureKind::Tree => write!(f, "tree"),
            StructureKind::Graph => write!(f, "graph"),
        }
    }
}

impl FromStr for StructureKind {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "array" => Ok(StructureKind::Array),
            "linked-list" | "linkedlist" | "list" => Ok(StructureKind::LinkedList),
            "tree" => Ok(StructureKind::Tree),
            "graph" => Ok(StructureKind::Graph),
            _ => Err(TraceError::UnknownStructure {
                name: s.to_string(),
            }),
        }
    }
}

/// One node of an adjacency-list graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub value: f64,
    /// Outgoing edges, in the order neighbours are explored
    pub connections: Vec<usize>,
}

impl GraphNode {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            connections: Vec::new(),
        }
    }

    pub fn with_connections(value: f64, connections: Vec<usize>) -> Self {
        Self { value, connections }
    }
}

/// A normalized structure instance, as produced by an adapter
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    Array(Vec<f64>),
    LinkedList(Vec<f64>),
    /// Complete binary tree; `None` marks an absent node
    Tree(Vec<Option<f64>>),
    Graph(Vec<GraphNode>),
}

impl Structure {
    /// An empty structure of the given kind
    pub fn empty(kind: StructureKind) -> Self {
        match kind {
            StructureKind::Array => Structure::Array(Vec::new()),
            StructureKind::LinkedList => Structure::LinkedList(Vec::new()),
            StructureKind::Tree => Structure::Tree(Vec::new()),
            StructureKind::Graph => Structure::Graph(Vec::new()),
        }
    }

    pub fn kind(&self) -> StructureKind {
        match self {
            Structure::Array(_) => StructureKind::Array,
            Structure::LinkedList(_) => StructureKind::LinkedList,
            Structure::Tree(_) => StructureKind::Tree,
            Structure::Graph(_) => StructureKind::Graph,
        }
    }

    /// Number of addressable slots (tree slots include absent nodes)
    pub fn len(&self) -> usize {
        match self {
            Structure::Array(values) | Structure::LinkedList(values) => values.len(),
            Structure::Tree(slots) => slots.len(),
            Structure::Graph(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at a slot, if the slot exists and holds a node
    pub fn value_at(&self, index: usize) -> Option<f64> {
        match self {
            Structure::Array(values) | Structure::LinkedList(values) => values.get(index).copied(),
            Structure::Tree(slots) => slots.get(index).copied().flatten(),
            Structure::Graph(nodes) => nodes.get(index).map(|node| node.value),
        }
    }

    /// Flat slot view used by node editing; graphs have none
    pub fn slots(&self) -> Option<Vec<Option<f64>>> {
        match self {
            Structure::Array(values) | Structure::LinkedList(values) => {
                Some(values.iter().copied().map(Some).collect())
            }
            Structure::Tree(slots) => Some(slots.clone()),
            Structure::Graph(_) => None,
        }
    }
}

/// One value in a data snapshot, tagged with a stable identity
///
/// The `id` is the element's index in the input the trace was built from. It
/// follows the element through every reordering, so renderers can track
/// duplicates without searching by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: usize,
    pub value: f64,
}

impl Element {
    /// Tag each value with its starting index
    pub fn from_values(values: &[f64]) -> Vec<Element> {
        values
            .iter()
            .enumerate()
            .map(|(id, &value)| Element { id, value })
            .collect()
    }
}

/// Format a value the way step descriptions print it (`5`, not `5.0`)
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}
