//! Traces: the complete, ordered step sequence of one algorithm run

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Element, Step, StructureKind};

/// The full sequence of steps for one algorithm run over one input
///
/// A trace is built once by a [`TraceRecorder`] and never changes afterwards;
/// playback shares it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    kind: StructureKind,
    algorithm: String,
    structure_len: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_snapshot: Option<Vec<Element>>,
    steps: Vec<Step>,
}

impl Trace {
    /// A trace with no steps, for when there is nothing to play
    pub fn empty(kind: StructureKind, algorithm: impl Into<String>) -> Self {
        TraceRecorder::new(kind, algorithm, 0).finish()
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Length of the structure the indices refer to
    pub fn structure_len(&self) -> usize {
        self.structure_len
    }

    /// Element order before the algorithm ran (reordering algorithms only)
    pub fn initial_snapshot(&self) -> Option<&[Element]> {
        self.initial_snapshot.as_deref()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// The last snapshot recorded, i.e. the element order the run ended with
    pub fn final_snapshot(&self) -> Option<&[Element]> {
        self.steps.iter().rev().find_map(|step| step.data_snapshot())
    }
}

/// Append-only builder for a [`Trace`]
pub struct TraceRecorder {
    kind: StructureKind,
    algorithm: String,
    structure_len: usize,
    initial_snapshot: Option<Vec<Element>>,
    steps: Vec<Step>,
}

impl TraceRecorder {
    pub fn new(kind: StructureKind, algorithm: impl Into<String>, structure_len: usize) -> Self {
        Self {
            kind,
            algorithm: algorithm.into(),
            structure_len,
            initial_snapshot: None,
            steps: Vec::new(),
        }
    }

    /// Remember the starting element order so playback can restore it on reset
    pub fn with_initial_snapshot(mut self, elements: &[Element]) -> Self {
        self.initial_snapshot = Some(elements.to_vec());
        self
    }

    /// Append a step
    ///
    /// Every index the step refers to must address the structure.
    pub fn record(&mut self, step: Step) {
        debug_assert!(
            step.referenced_indices().all(|i| i < self.structure_len),
            "step '{}' refers to an index outside 0..{}",
            step.description(),
            self.structure_len
        );
        trace!(
            index = self.steps.len(),
            description = step.description(),
            "Recorded step"
        );
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Trace {
        Trace {
            kind: self.kind,
            algorithm: self.algorithm,
            structure_len: self.structure_len,
            initial_snapshot: self.initial_snapshot,
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_appends_in_order() {
        let mut recorder = TraceRecorder::new(StructureKind::LinkedList, "traverse", 2);
        recorder.record(Step::new("first").active([0]));
        recorder.record(Step::new("second").active([1]).highlighted([0]));
        let trace = recorder.finish();

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0).unwrap().description(), "first");
        assert_eq!(trace.last().unwrap().description(), "second");
        assert_eq!(trace.algorithm(), "traverse");
        assert!(trace.initial_snapshot().is_none());
    }

    #[test]
    fn test_final_snapshot_skips_steps_without_one() {
        let elements = Element::from_values(&[2.0, 1.0]);
        let mut recorder = TraceRecorder::new(StructureKind::Array, "demo", 2)
            .with_initial_snapshot(&elements);
        recorder.record(Step::new("snap").with_snapshot(&elements));
        recorder.record(Step::new("done"));
        let trace = recorder.finish();

        assert_eq!(trace.final_snapshot().map(|s| s.len()), Some(2));
        assert_eq!(trace.initial_snapshot().map(|s| s[0].value), Some(2.0));
    }

    #[test]
    fn test_empty_trace() {
        let trace = Trace::empty(StructureKind::Tree, "inorder");
        assert!(trace.is_empty());
        assert!(trace.final_snapshot().is_none());
    }
}
