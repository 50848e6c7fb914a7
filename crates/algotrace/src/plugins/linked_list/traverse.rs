//! Linked list traversal trace

use crate::core::{
    format_value, Algorithm, Result, Step, Structure, StructureKind, Trace, TraceParams,
    TraceRecorder,
};
use crate::plugins::array_values;
use tracing::{debug, span, Level};

const NAME: &str = "traverse";

/// Walk the list from head to tail
pub struct Traverse;

impl Algorithm for Traverse {
    fn name(&self) -> &'static str {
        NAME
    }

    fn structure(&self) -> StructureKind {
        StructureKind::LinkedList
    }

    fn summary(&self) -> &'static str {
        "Visit every node from head to tail"
    }

    fn trace(&self, structure: &Structure, _params: &TraceParams) -> Result<Trace> {
        let values = array_values(structure, NAME, StructureKind::LinkedList)?;
        Ok(traverse(values))
    }
}

/// One step per node; the previous node stays highlighted
pub fn traverse(values: &[f64]) -> Trace {
    let traverse_span = span!(Level::DEBUG, "traverse", len = values.len());
    let _enter = traverse_span.enter();

    let mut recorder = TraceRecorder::new(StructureKind::LinkedList, NAME, values.len());
    for (i, value) in values.iter().enumerate() {
        recorder.record(
            Step::new(format!("Visiting node with value {}", format_value(*value)))
                .active([i])
                .highlighted(i.checked_sub(1)),
        );
    }

    debug!(steps = recorder.len(), "Traversal trace built");
    recorder.finish()
}
