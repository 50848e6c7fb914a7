//! Quick sort trace (Lomuto partition)

use crate::core::{
    format_value, Algorithm, Element, Result, Step, Structure, StructureKind, Trace, TraceParams,
    TraceRecorder,
};
use crate::plugins::array_values;
use tracing::{debug, span, trace, Level};

const NAME: &str = "quick-sort";

/// Quick sort with the last element of each range as pivot
pub struct QuickSort;

impl Algorithm for QuickSort {
    fn name(&self) -> &'static str {
        NAME
    }

    fn structure(&self) -> StructureKind {
        StructureKind::Array
    }

    fn summary(&self) -> &'static str {
        "Partition around the last element, then sort each side"
    }

    fn reorders(&self) -> bool {
        true
    }

    fn trace(&self, structure: &Structure, _params: &TraceParams) -> Result<Trace> {
        let values = array_values(structure, NAME, StructureKind::Array)?;
        Ok(quick_sort(values))
    }
}

/// A pending subrange; `announce` is false only for the outermost range
struct Range {
    low: usize,
    high: usize,
    announce: bool,
}

/// Trace a quick sort of `values`
///
/// The recursion runs on an explicit stack so sorted input cannot overflow
/// the call stack. The right range is pushed before the left one, which keeps
/// the left partition fully traced before the right, exactly as the recursive
/// formulation would.
pub fn quick_sort(values: &[f64]) -> Trace {
    let sort_span = span!(Level::DEBUG, "quick_sort", len = values.len());
    let _enter = sort_span.enter();

    let mut elements = Element::from_values(values);
    let n = elements.len();
    let mut recorder =
        TraceRecorder::new(StructureKind::Array, NAME, n).with_initial_snapshot(&elements);

    if n == 0 {
        return recorder.finish();
    }

    let mut pending = vec![Range {
        low: 0,
        high: n - 1,
        announce: false,
    }];

    while let Some(Range {
        low,
        high,
        announce,
    }) = pending.pop()
    {
        if low >= high {
            continue;
        }
        if announce {
            recorder.record(
                Step::new(format!("Sorting subarray [{}, {}]", low, high))
                    .highlighted(low..=high)
                    .with_snapshot(&elements),
            );
        }

        let pivot_index = partition(&mut elements, low, high, &mut recorder);
        trace!(low, high, pivot_index, "Partitioned range");

        // Ranges under two elements are already sorted
        if pivot_index + 1 < high {
            pending.push(Range {
                low: pivot_index + 1,
                high,
                announce: true,
            });
        }
        if pivot_index > low + 1 {
            pending.push(Range {
                low,
                high: pivot_index - 1,
                announce: true,
            });
        }
    }

    recorder.record(
        Step::new("Array is sorted")
            .highlighted(0..n)
            .with_snapshot(&elements),
    );

    let trace = recorder.finish();
    debug!(steps = trace.len(), "Quick sort trace built");
    trace
}

/// Lomuto partition of `elements[low..=high]`; returns the pivot's final index
fn partition(
    elements: &mut [Element],
    low: usize,
    high: usize,
    recorder: &mut TraceRecorder,
) -> usize {
    let pivot = elements[high].value;
    let pivot_text = format_value(pivot);

    recorder.record(
        Step::new(format!("Choosing pivot: {}", pivot_text))
            .active([high])
            .with_snapshot(elements),
    );

    // Next slot for an element <= pivot
    let mut store = low;
    for j in low..high {
        recorder.record(
            Step::new(format!(
                "Comparing {} with pivot {}",
                format_value(elements[j].value),
                pivot_text
            ))
            .active([j])
            .highlighted([high])
            .comparing([j, high])
            .with_snapshot(elements),
        );

        if elements[j].value <= pivot {
            if store != j {
                let (a, b) = (
                    format_value(elements[store].value),
                    format_value(elements[j].value),
                );
                recorder.record(
                    Step::new(format!("Swapping {} and {}", a, b))
                        .active([store, j])
                        .highlighted([high])
                        .with_snapshot(elements),
                );
                elements.swap(store, j);
                recorder.record(
                    Step::new(format!("Swapped {} and {}", a, b))
                        .active([store, j])
                        .highlighted([high])
                        .with_snapshot(elements),
                );
            }
            store += 1;
        }
    }

    recorder.record(
        Step::new(format!(
            "Placing pivot {} at index {}",
            pivot_text, store
        ))
        .active([store, high])
        .with_snapshot(elements),
    );
    elements.swap(store, high);
    recorder.record(
        Step::new(format!("Pivot {} placed at index {}", pivot_text, store))
            .active([store])
            .highlighted([store])
            .with_snapshot(elements),
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(trace: &Trace) -> Vec<&str> {
        trace.iter().map(|step| step.description()).collect()
    }

    #[test]
    fn test_quick_sort_sorts() {
        let trace = quick_sort(&[3.0, 6.0, 1.0, 8.0, 2.0, 9.0, 2.0]);
        assert_eq!(
            trace.last().unwrap().snapshot_values(),
            Some(vec![1.0, 2.0, 2.0, 3.0, 6.0, 8.0, 9.0])
        );
    }

    #[test]
    fn test_quick_sort_no_self_swaps() {
        // Already sorted: every element <= pivot lands in its own slot
        let trace = quick_sort(&[1.0, 2.0, 3.0]);
        assert!(descriptions(&trace)
            .iter()
            .all(|d| !d.starts_with("Swapping")));
    }

    #[test]
    fn test_quick_sort_exact_sequence() {
        let trace = quick_sort(&[2.0, 1.0]);
        assert_eq!(
            descriptions(&trace),
            vec![
                "Choosing pivot: 1",
                "Comparing 2 with pivot 1",
                "Placing pivot 1 at index 0",
                "Pivot 1 placed at index 0",
                "Array is sorted",
            ]
        );
        assert_eq!(trace.get(1).unwrap().comparisons(), &[0, 1]);
    }

    #[test]
    fn test_quick_sort_left_partition_before_right() {
        // Pivot 4 lands in the middle; both sides need sorting
        let trace = quick_sort(&[3.0, 1.0, 2.0, 4.0, 6.0, 5.0, 7.0, 4.0]);
        let announced: Vec<&str> = descriptions(&trace)
            .into_iter()
            .filter(|d| d.starts_with("Sorting subarray"))
            .collect();
        assert!(announced.len() >= 2);
        let first_left = announced.iter().position(|d| d.contains("[0,"));
        let first_right = announced.iter().position(|d| !d.contains("[0,"));
        assert!(first_left < first_right);
    }

    #[test]
    fn test_quick_sort_sorted_input_worst_case() {
        // Every partition is maximally unbalanced
        let values: Vec<f64> = (0..150).map(f64::from).collect();
        let trace = quick_sort(&values);
        assert_eq!(trace.final_snapshot().unwrap().len(), 150);
        assert_eq!(trace.last().unwrap().snapshot_values(), Some(values));
    }

    #[test]
    fn test_quick_sort_trivial_inputs() {
        assert!(quick_sort(&[]).is_empty());
        assert_eq!(descriptions(&quick_sort(&[4.0])), vec!["Array is sorted"]);
    }
}
