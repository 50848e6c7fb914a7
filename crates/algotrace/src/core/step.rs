//! The step model: one immutable instant of an algorithm run
//!
//! Steps are assembled with the builder methods below and then handed to a
//! [`TraceRecorder`](super::TraceRecorder); once recorded they are only ever
//! read.

use serde::{Deserialize, Serialize};

use super::Element;

/// A single recorded instant of algorithm execution
///
/// Index sets are duplicate-free and keep insertion order, so a visited set
/// reads in visit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    active_nodes: Vec<usize>,
    highlighted_nodes: Vec<usize>,
    comparisons: Vec<usize>,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_snapshot: Option<Vec<Element>>,
}

impl Step {
    /// Start a step with the given narration and no indices
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            active_nodes: Vec::new(),
            highlighted_nodes: Vec::new(),
            comparisons: Vec::new(),
            description: description.into(),
            data_snapshot: None,
        }
    }

    pub fn active(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.active_nodes = index_set(indices);
        self
    }

    pub fn highlighted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlighted_nodes = index_set(indices);
        self
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparisons = index_set(indices);
        self
    }

    /// Attach a copy of the structure's current element order
    pub fn with_snapshot(mut self, elements: &[Element]) -> Self {
        self.data_snapshot = Some(elements.to_vec());
        self
    }

    pub fn active_nodes(&self) -> &[usize] {
        &self.active_nodes
    }

    pub fn highlighted_nodes(&self) -> &[usize] {
        &self.highlighted_nodes
    }

    pub fn comparisons(&self) -> &[usize] {
        &self.comparisons
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn data_snapshot(&self) -> Option<&[Element]> {
        self.data_snapshot.as_deref()
    }

    /// Snapshot values without identities
    pub fn snapshot_values(&self) -> Option<Vec<f64>> {
        self.data_snapshot
            .as_ref()
            .map(|elements| elements.iter().map(|e| e.value).collect())
    }

    /// Every index this step refers to, across all three sets
    pub fn referenced_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active_nodes
            .iter()
            .chain(&self.highlighted_nodes)
            .chain(&self.comparisons)
            .copied()
    }
}

fn index_set(indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut set = Vec::new();
    for index in indices {
        if !set.contains(&index) {
            set.push(index);
        }
    }
    set
}
