//! Algorithm registry: resolves (structure kind, algorithm name) selections
//!
//! The registry owns one adapter per structure kind and every algorithm the
//! plugins provide, and runs the adapter -> algorithm pipeline for callers
//! that just want a trace.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, span, warn, Level};

use crate::core::{Adapter, Algorithm, Result, Structure, StructureKind, Trace, TraceError, TraceParams};

/// One registered (structure, algorithm) pair, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub structure: StructureKind,
    pub name: &'static str,
    pub summary: &'static str,
    pub reorders: bool,
}

/// Lookup table of adapters and algorithms
pub struct AlgorithmRegistry {
    adapters: BTreeMap<StructureKind, Box<dyn Adapter>>,
    algorithms: BTreeMap<StructureKind, Vec<Box<dyn Algorithm>>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            adapters: BTreeMap::new(),
            algorithms: BTreeMap::new(),
        }
    }

    /// Create a registry with every built-in plugin registered
    pub fn with_all_plugins() -> Self {
        let mut registry = Self::new();
        super::array::register(&mut registry);
        super::linked_list::register(&mut registry);
        super::tree::register(&mut registry);
        super::graph::register(&mut registry);
        debug!(
            adapters = registry.adapters.len(),
            algorithms = registry.list().len(),
            "Registered built-in plugins"
        );
        registry
    }

    /// Register an adapter, replacing any previous one for the same kind
    pub fn register_adapter(&mut self, adapter: Box<dyn Adapter>) {
        self.adapters.insert(adapter.kind(), adapter);
    }

    /// Register an algorithm, replacing any previous one with the same
    /// structure and name
    pub fn register_algorithm(&mut self, algorithm: Box<dyn Algorithm>) {
        let entries = self.algorithms.entry(algorithm.structure()).or_default();
        match entries.iter().position(|a| a.name() == algorithm.name()) {
            Some(existing) => entries[existing] = algorithm,
            None => entries.push(algorithm),
        }
    }

    /// The adapter for a structure kind
    pub fn adapter(&self, kind: StructureKind) -> Result<&dyn Adapter> {
        self.adapters
            .get(&kind)
            .map(|adapter| adapter.as_ref())
            .ok_or_else(|| TraceError::UnknownStructure {
                name: kind.to_string(),
            })
    }

    /// The algorithm registered under `name` for a structure kind
    pub fn algorithm(&self, kind: StructureKind, name: &str) -> Result<&dyn Algorithm> {
        self.algorithms
            .get(&kind)
            .and_then(|entries| entries.iter().find(|a| a.name() == name))
            .map(|algorithm| algorithm.as_ref())
            .ok_or_else(|| {
                warn!(%kind, algorithm = name, "Unknown algorithm requested");
                TraceError::unknown_algorithm(kind, name)
            })
    }

    /// Names of the algorithms for one structure kind, in registration order
    pub fn algorithms_for(&self, kind: StructureKind) -> Vec<&'static str> {
        self.algorithms
            .get(&kind)
            .map(|entries| entries.iter().map(|a| a.name()).collect())
            .unwrap_or_default()
    }

    /// Every registered pair, grouped by structure kind
    pub fn list(&self) -> Vec<AlgorithmInfo> {
        self.algorithms
            .iter()
            .flat_map(|(kind, entries)| {
                entries.iter().map(move |a| AlgorithmInfo {
                    structure: *kind,
                    name: a.name(),
                    summary: a.summary(),
                    reorders: a.reorders(),
                })
            })
            .collect()
    }

    /// Normalize raw input with the kind's adapter
    pub fn adapt(&self, kind: StructureKind, raw: &str) -> Result<Structure> {
        self.adapter(kind)?.adapt(raw)
    }

    /// Run a registered algorithm over an already-adapted structure
    pub fn trace_structure(
        &self,
        name: &str,
        structure: &Structure,
        params: &TraceParams,
    ) -> Result<Trace> {
        let kind = structure.kind();
        let trace_span = span!(Level::INFO, "trace_structure", %kind, algorithm = name);
        let _enter = trace_span.enter();

        let algorithm = self.algorithm(kind, name)?;
        let trace = algorithm.trace(structure, params)?;
        info!(steps = trace.len(), "Trace built");
        Ok(trace)
    }

    /// Adapt raw input and trace it in one call
    ///
    /// The algorithm is resolved before the input is parsed, so an unknown
    /// name fails fast even for malformed input.
    pub fn build_trace(
        &self,
        kind: StructureKind,
        name: &str,
        raw: &str,
        params: &TraceParams,
    ) -> Result<Trace> {
        let build_span = span!(
            Level::INFO,
            "build_trace",
            %kind,
            algorithm = name,
            input_len = raw.len()
        );
        let _enter = build_span.enter();

        self.algorithm(kind, name)?;

        let adapt_span = span!(Level::DEBUG, "pipeline_adapt");
        let adapt_enter = adapt_span.enter();
        let structure = self.adapt(kind, raw)?;
        debug!(len = structure.len(), "Input adapted");
        drop(adapt_enter);

        self.trace_structure(name, &structure, params)
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::with_all_plugins()
    }
}
