//! Bubble sort trace

use crate::core::{
    format_value, Algorithm, Element, Result, Step, Structure, StructureKind, Trace, TraceParams,
    TraceRecorder,
};
use crate::plugins::array_values;
use tracing::{debug, span, Level};

const NAME: &str = "bubble-sort";

/// Adjacent-pair bubble sort with `n - 1` full passes
pub struct BubbleSort;

impl Algorithm for BubbleSort {
    fn name(&self) -> &'static str {
        NAME
    }

    fn structure(&self) -> StructureKind {
        StructureKind::Array
    }

    fn summary(&self) -> &'static str {
        "Repeatedly swap adjacent out-of-order pairs"
    }

    fn reorders(&self) -> bool {
        true
    }

    fn trace(&self, structure: &Structure, _params: &TraceParams) -> Result<Trace> {
        let values = array_values(structure, NAME, StructureKind::Array)?;
        Ok(bubble_sort(values))
    }
}

/// Trace a bubble sort of `values`
///
/// Every step carries the element order at that instant. Equal neighbours are
/// compared but never swapped.
pub fn bubble_sort(values: &[f64]) -> Trace {
    let sort_span = span!(Level::DEBUG, "bubble_sort", len = values.len());
    let _enter = sort_span.enter();

    let mut elements = Element::from_values(values);
    let n = elements.len();
    let mut recorder =
        TraceRecorder::new(StructureKind::Array, NAME, n).with_initial_snapshot(&elements);

    if n == 0 {
        return recorder.finish();
    }

    for pass in 0..n - 1 {
        // Indices past `last` are already in their final place
        let last = n - pass - 1;
        let mut swaps = 0;

        for j in 0..last {
            let left = format_value(elements[j].value);
            let right = format_value(elements[j + 1].value);

            recorder.record(
                Step::new(format!("Comparing {} and {}", left, right))
                    .active([j, j + 1])
                    .comparing([j, j + 1])
                    .highlighted(last + 1..n)
                    .with_snapshot(&elements),
            );

            if elements[j].value > elements[j + 1].value {
                recorder.record(
                    Step::new(format!("Swapping {} and {}", left, right))
                        .active([j, j + 1])
                        .highlighted(last + 1..n)
                        .with_snapshot(&elements),
                );
                elements.swap(j, j + 1);
                recorder.record(
                    Step::new(format!("Swapped {} and {}", left, right))
                        .active([j, j + 1])
                        .highlighted(last + 1..n)
                        .with_snapshot(&elements),
                );
                swaps += 1;
            }
        }

        recorder.record(
            Step::new(format!(
                "Element {} is in its final position",
                format_value(elements[last].value)
            ))
            .highlighted(last..n)
            .with_snapshot(&elements),
        );
        debug!(pass, swaps, "Bubble sort pass complete");
    }

    recorder.record(
        Step::new("Array is sorted")
            .highlighted(0..n)
            .with_snapshot(&elements),
    );

    let trace = recorder.finish();
    debug!(steps = trace.len(), "Bubble sort trace built");
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sort_final_snapshot() {
        let trace = bubble_sort(&[5.0, 2.0, 8.0, 1.0]);
        assert_eq!(
            trace.last().unwrap().snapshot_values(),
            Some(vec![1.0, 2.0, 5.0, 8.0])
        );
        assert!(trace.last().unwrap().description().contains("sorted"));
        assert_eq!(trace.last().unwrap().highlighted_nodes(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_bubble_sort_step_count() {
        // 3 passes: (3 cmp + 2 swaps*2 + 1) + (2 + 1*2 + 1) + (1 + 1*2 + 1) + final
        let trace = bubble_sort(&[5.0, 2.0, 8.0, 1.0]);
        assert_eq!(trace.len(), 18);
    }

    #[test]
    fn test_bubble_sort_equal_neighbours_never_swap() {
        let trace = bubble_sort(&[3.0, 3.0]);
        assert!(trace
            .iter()
            .all(|step| !step.description().starts_with("Swapping")));
        // The duplicates keep their original identities in order
        let ids: Vec<usize> = trace
            .final_snapshot()
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_bubble_sort_single_and_empty() {
        assert_eq!(bubble_sort(&[7.0]).len(), 1);
        assert!(bubble_sort(&[]).is_empty());
    }
}
