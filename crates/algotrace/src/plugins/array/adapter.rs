//! Array adapter: delimited text to a flat sequence of numbers

use crate::core::chumsky_utils::tokenize;
use crate::core::{Adapter, Result, Structure, StructureKind};
use tracing::{debug, span, trace, Level};

/// Parse delimited text into numbers, silently dropping anything that is not
/// a finite number
///
/// ```rust
/// use algotrace::plugins::array::to_array;
///
/// assert_eq!(to_array("5, 2, x, 8"), vec![5.0, 2.0, 8.0]);
/// ```
pub fn to_array(raw: &str) -> Vec<f64> {
    let parse_span = span!(Level::DEBUG, "to_array", input_len = raw.len());
    let _enter = parse_span.enter();

    let tokens = tokenize(raw);
    let values: Vec<f64> = tokens.iter().filter_map(|t| parse_number(t)).collect();

    let dropped = tokens.len() - values.len();
    if dropped > 0 {
        debug!(dropped, "Discarded non-numeric tokens");
    }
    trace!(count = values.len(), "Parsed array values");
    values
}

/// Parse one token as a finite number
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Adapter for [`StructureKind::Array`]
pub struct ArrayAdapter;

impl ArrayAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArrayAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for ArrayAdapter {
    fn kind(&self) -> StructureKind {
        StructureKind::Array
    }

    fn adapt(&self, raw: &str) -> Result<Structure> {
        Ok(Structure::Array(to_array(raw)))
    }

    fn name(&self) -> &'static str {
        "array"
    }
}
