//! Linked list reversal trace

use crate::core::{
    format_value, Algorithm, Element, Result, Step, Structure, StructureKind, Trace, TraceParams,
    TraceRecorder,
};
use crate::plugins::array_values;
use tracing::{debug, span, Level};

const NAME: &str = "reverse";

/// Reverse the list by swapping mirrored pairs
pub struct Reverse;

impl Algorithm for Reverse {
    fn name(&self) -> &'static str {
        NAME
    }

    fn structure(&self) -> StructureKind {
        StructureKind::LinkedList
    }

    fn summary(&self) -> &'static str {
        "Swap mirrored pairs from both ends toward the middle"
    }

    fn reorders(&self) -> bool {
        true
    }

    fn trace(&self, structure: &Structure, _params: &TraceParams) -> Result<Trace> {
        let values = array_values(structure, NAME, StructureKind::LinkedList)?;
        Ok(reverse(values))
    }
}

/// One step per swapped pair `(i, n - 1 - i)`
///
/// Each step's snapshot shows the list after its swap. The middle element of
/// an odd-length list is never paired with itself.
pub fn reverse(values: &[f64]) -> Trace {
    let reverse_span = span!(Level::DEBUG, "reverse", len = values.len());
    let _enter = reverse_span.enter();

    let mut elements = Element::from_values(values);
    let n = elements.len();
    let mut recorder =
        TraceRecorder::new(StructureKind::LinkedList, NAME, n).with_initial_snapshot(&elements);

    for i in 0..n / 2 {
        let mirror = n - 1 - i;
        let description = format!(
            "Swapping {} and {}",
            format_value(elements[i].value),
            format_value(elements[mirror].value)
        );
        elements.swap(i, mirror);
        recorder.record(
            Step::new(description)
                .active([i, mirror])
                .comparing([i, mirror])
                .with_snapshot(&elements),
        );
    }

    debug!(steps = recorder.len(), "Reversal trace built");
    recorder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_odd_length() {
        let trace = reverse(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0).unwrap().active_nodes(), &[0, 4]);
        assert_eq!(trace.get(1).unwrap().active_nodes(), &[1, 3]);
        assert_eq!(
            trace.last().unwrap().snapshot_values(),
            Some(vec![5.0, 4.0, 3.0, 2.0, 1.0])
        );
    }

    #[test]
    fn test_reverse_even_length() {
        let trace = reverse(&[1.0, 2.0]);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.get(0).unwrap().description(), "Swapping 1 and 2");
    }

    #[test]
    fn test_reverse_single_node_has_no_steps() {
        assert!(reverse(&[9.0]).is_empty());
    }

    #[test]
    fn test_reverse_keeps_initial_order_for_reset() {
        let trace = reverse(&[1.0, 2.0, 3.0]);
        let initial: Vec<f64> = trace
            .initial_snapshot()
            .unwrap()
            .iter()
            .map(|e| e.value)
            .collect();
        assert_eq!(initial, vec![1.0, 2.0, 3.0]);
    }
}
