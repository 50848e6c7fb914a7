//! Algotrace - step-by-step traces of classic data-structure algorithms
//!
//! Runs sorting, searching, and traversal algorithms over arrays, linked
//! lists, binary trees, and graphs, recording every observable micro-step
//! into an immutable [`Trace`]. A [`PlaybackController`](playback::PlaybackController)
//! then replays the trace with play/pause/step/speed/reset controls.
//!
//! # Quick Start
//!
//! ```rust
//! use algotrace::{trace, StructureKind, TraceParams};
//!
//! let trace = trace(StructureKind::Array, "bubble-sort", "5, 2, 8, 1", &TraceParams::new()).unwrap();
//! assert_eq!(trace.len(), 18);
//! assert!(trace.last().unwrap().description().contains("sorted"));
//! ```
//!
//! # Advanced Usage
//!
//! For interactive use, a [`Session`](session::Session) keeps the selection,
//! the parsed input, and playback together:
//!
//! ```rust
//! use std::time::Instant;
//! use algotrace::prelude::*;
//!
//! let mut session = Session::new(AlgorithmRegistry::with_all_plugins(), PlaybackConfig::default()).unwrap();
//! session.set_structure_kind(StructureKind::Tree).unwrap();
//! session.load_input("1, 2, 3").unwrap();
//!
//! let now = Instant::now();
//! session.step_forward(now);
//! let step = session.controller().current_step().unwrap();
//! assert_eq!(step.description(), "Visiting node 1");
//! ```

pub mod core;
pub mod playback;
pub mod plugins;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

use anyhow::Context;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Adapter, Algorithm, Element, GraphNode, PlaybackConfig, Step, Structure, StructureKind,
        Trace, TraceError, TraceParams,
    };
    pub use crate::playback::{PlaybackController, PlaybackEvent, PlaybackState, TickTimer};
    pub use crate::plugins::{AlgorithmInfo, AlgorithmRegistry};
    pub use crate::session::Session;
}

/// Build the trace for one algorithm over raw input
///
/// This is the simplest way to get a trace. The kind's adapter parses `raw`
/// and the named algorithm runs over the result.
///
/// # Arguments
/// * `kind` - The structure kind `raw` describes
/// * `algorithm` - A name registered for that kind (e.g. "quick-sort")
/// * `raw` - Delimited numbers, or graph JSON
/// * `params` - Extra inputs such as a search target
///
/// # Example
/// ```rust
/// use algotrace::{trace, StructureKind, TraceParams};
///
/// let trace = trace(StructureKind::Array, "binary-search", "1 3 5 7 9", &TraceParams::with_target(7.0)).unwrap();
/// assert_eq!(trace.last().unwrap().description(), "Found target 7 at index 3");
/// ```
pub fn trace(
    kind: StructureKind,
    algorithm: &str,
    raw: &str,
    params: &TraceParams,
) -> Result<Trace> {
    plugins::AlgorithmRegistry::with_all_plugins().build_trace(kind, algorithm, raw, params)
}

/// Build a trace from string selections and serialize it as JSON
///
/// # Example
/// ```rust
/// use algotrace::trace_json;
///
/// let json = trace_json("linked-list", "traverse", "4 5", None).unwrap();
/// assert!(json.contains("Visiting node with value 5"));
/// ```
pub fn trace_json(
    structure: &str,
    algorithm: &str,
    raw: &str,
    target: Option<f64>,
) -> anyhow::Result<String> {
    let kind: StructureKind = structure.parse()?;
    let params = TraceParams { target };
    let trace = trace(kind, algorithm, raw, &params)
        .with_context(|| format!("Failed to trace {} over {} input", algorithm, kind))?;
    serde_json::to_string(&trace).context("Failed to serialize trace")
}
