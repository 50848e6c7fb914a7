//! WebAssembly bindings for Algotrace
//!
//! Browser front ends build traces here and drive playback themselves from
//! the returned JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::StructureKind;
#[cfg(target_arch = "wasm32")]
use crate::plugins::AlgorithmRegistry;

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Build a trace and return it as JSON
///
/// # Arguments
/// * `structure` - "array", "linked-list", "tree", or "graph"
/// * `algorithm` - An algorithm registered for that structure
/// * `input` - Delimited numbers, or graph JSON
/// * `target` - Search target for binary search
///
/// # Returns
/// * The serialized trace
/// * Throws a JavaScript error for malformed input or unknown names
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn trace_json(
    structure: &str,
    algorithm: &str,
    input: &str,
    target: Option<f64>,
) -> Result<String, JsValue> {
    crate::trace_json(structure, algorithm, input, target)
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// List registered algorithms as JSON
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn algorithms_json() -> Result<String, JsValue> {
    let registry = AlgorithmRegistry::with_all_plugins();
    serde_json::to_string(&registry.list()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Algorithms for one structure kind as a JSON array of names
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn algorithms_for(structure: &str) -> Result<String, JsValue> {
    let kind: StructureKind = structure
        .parse()
        .map_err(|e: crate::core::TraceError| JsValue::from_str(&e.to_string()))?;
    let registry = AlgorithmRegistry::with_all_plugins();
    serde_json::to_string(&registry.algorithms_for(kind))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
