//! Array plugin
//!
//! Flat number sequences with two in-place sorts and a binary search:
//! - `bubble-sort`
//! - `quick-sort`
//! - `binary-search` (needs a target)

mod adapter;
mod binary_search;
mod bubble_sort;
mod quick_sort;

pub use adapter::{to_array, ArrayAdapter};
pub use binary_search::{binary_search, BinarySearch};
pub use bubble_sort::{bubble_sort, BubbleSort};
pub use quick_sort::{quick_sort, QuickSort};

pub(crate) use adapter::parse_number;

use crate::plugins::AlgorithmRegistry;

/// Register the array adapter and algorithms
pub fn register(registry: &mut AlgorithmRegistry) {
    registry.register_adapter(Box::new(ArrayAdapter::new()));
    registry.register_algorithm(Box::new(BubbleSort));
    registry.register_algorithm(Box::new(QuickSort));
    registry.register_algorithm(Box::new(BinarySearch));
}
