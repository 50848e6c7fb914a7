//! Binary search trace

use crate::core::{
    format_value, Algorithm, Result, Step, Structure, StructureKind, Trace, TraceError,
    TraceParams, TraceRecorder,
};
use crate::plugins::array_values;
use tracing::{debug, span, Level};

const NAME: &str = "binary-search";

/// Midpoint search over a sorted array
pub struct BinarySearch;

impl Algorithm for BinarySearch {
    fn name(&self) -> &'static str {
        NAME
    }

    fn structure(&self) -> StructureKind {
        StructureKind::Array
    }

    fn summary(&self) -> &'static str {
        "Halve the search range around the middle element"
    }

    fn trace(&self, structure: &Structure, params: &TraceParams) -> Result<Trace> {
        let values = array_values(structure, NAME, StructureKind::Array)?;
        let target = params
            .target
            .ok_or_else(|| TraceError::missing_target(NAME))?;
        Ok(binary_search(values, target))
    }
}

/// Trace a binary search for `target`
///
/// One step per probe plus one terminal step, found or not. The input is
/// assumed sorted; on unsorted input the probes are still recorded faithfully.
pub fn binary_search(values: &[f64], target: f64) -> Trace {
    let search_span = span!(
        Level::DEBUG,
        "binary_search",
        len = values.len(),
        search_target = target
    );
    let _enter = search_span.enter();

    let target_text = format_value(target);
    let mut recorder = TraceRecorder::new(StructureKind::Array, NAME, values.len());

    if !values.is_empty() {
        let (mut left, mut right) = (0usize, values.len() - 1);
        while left <= right {
            let mid = left + (right - left) / 2;
            recorder.record(
                Step::new(format!(
                    "Checking middle element: {}",
                    format_value(values[mid])
                ))
                .active([mid])
                .highlighted([left, right]),
            );

            if values[mid] == target {
                recorder.record(
                    Step::new(format!("Found target {} at index {}", target_text, mid))
                        .active([mid]),
                );
                debug!(index = mid, probes = recorder.len() - 1, "Target found");
                return recorder.finish();
            }

            if values[mid] < target {
                left = mid + 1;
            } else if mid == 0 {
                break;
            } else {
                right = mid - 1;
            }
        }
    }

    recorder.record(Step::new(format!(
        "Target {} not found in the array",
        target_text
    )));
    debug!(probes = recorder.len() - 1, "Target not found");
    recorder.finish()
}
