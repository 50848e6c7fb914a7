//! Linked list plugin
//!
//! A flat sequence read as forward links `i -> i + 1`:
//! - `traverse`
//! - `reverse`

mod reverse;
mod traverse;

pub use reverse::{reverse, Reverse};
pub use traverse::{traverse, Traverse};

use crate::core::{Adapter, Result, Structure, StructureKind};
use crate::plugins::array::to_array;
use crate::plugins::AlgorithmRegistry;

/// Adapter for [`StructureKind::LinkedList`]; same grammar as arrays
pub struct LinkedListAdapter;

impl LinkedListAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinkedListAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for LinkedListAdapter {
    fn kind(&self) -> StructureKind {
        StructureKind::LinkedList
    }

    fn adapt(&self, raw: &str) -> Result<Structure> {
        Ok(Structure::LinkedList(to_array(raw)))
    }

    fn name(&self) -> &'static str {
        "linked-list"
    }
}

/// Register the linked list adapter and algorithms
pub fn register(registry: &mut AlgorithmRegistry) {
    registry.register_adapter(Box::new(LinkedListAdapter::new()));
    registry.register_algorithm(Box::new(Traverse));
    registry.register_algorithm(Box::new(Reverse));
}
