//! Core traits for structure adapters and trace algorithms
//!
//! Each structure kind is a plugin made of one [`Adapter`] and a handful of
//! [`Algorithm`]s. The registry looks them up by kind and name.

use super::{Result, Structure, StructureKind, Trace};

/// Extra inputs an algorithm may need besides the structure itself
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraceParams {
    /// Value to look for (binary search)
    pub target: Option<f64>,
}

impl TraceParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(target: f64) -> Self {
        Self {
            target: Some(target),
        }
    }
}

/// Normalizes raw caller input into a [`Structure`]
pub trait Adapter: Send + Sync {
    /// The structure kind this adapter produces
    fn kind(&self) -> StructureKind;

    /// Parse raw text into a structure
    ///
    /// Fails only with [`TraceError::MalformedInput`](super::TraceError::MalformedInput);
    /// lenient adapters skip what they cannot read instead.
    fn adapt(&self, raw: &str) -> Result<Structure>;

    /// Get the name of this adapter
    fn name(&self) -> &'static str;
}

/// A pure function from a structure to a [`Trace`]
///
/// Implementations never perform I/O or read the clock, so the same structure
/// and params always produce the same trace.
pub trait Algorithm: Send + Sync {
    /// Registry name, e.g. `bubble-sort`
    fn name(&self) -> &'static str;

    /// The structure kind this algorithm runs over
    fn structure(&self) -> StructureKind;

    /// One-line description for listings
    fn summary(&self) -> &'static str;

    /// Whether the steps carry data snapshots because elements move
    fn reorders(&self) -> bool {
        false
    }

    /// Run the algorithm and record every step
    fn trace(&self, structure: &Structure, params: &TraceParams) -> Result<Trace>;
}
