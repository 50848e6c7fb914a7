//! Plugin implementations for each structure kind
//!
//! Every plugin owns one adapter and its algorithms, and exposes a
//! `register` function that adds them to an [`AlgorithmRegistry`].

pub mod array;
pub mod graph;
pub mod linked_list;
pub mod registry;
pub mod tree;

pub use registry::*;

use crate::core::{GraphNode, Result, Structure, StructureKind, TraceError};

/// Borrow the values of a flat structure of the expected kind
pub(crate) fn array_values<'a>(
    structure: &'a Structure,
    algorithm: &str,
    expected: StructureKind,
) -> Result<&'a [f64]> {
    match (structure, expected) {
        (Structure::Array(values), StructureKind::Array)
        | (Structure::LinkedList(values), StructureKind::LinkedList) => Ok(values),
        (other, _) => Err(TraceError::structure_mismatch(
            algorithm,
            expected,
            other.kind(),
        )),
    }
}

/// Borrow the nodes of a graph structure
pub(crate) fn graph_nodes<'a>(structure: &'a Structure, algorithm: &str) -> Result<&'a [GraphNode]> {
    match structure {
        Structure::Graph(nodes) => Ok(nodes),
        other => Err(TraceError::structure_mismatch(
            algorithm,
            StructureKind::Graph,
            other.kind(),
        )),
    }
}
