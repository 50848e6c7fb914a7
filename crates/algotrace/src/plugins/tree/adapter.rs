//! Tree adapter: delimited text to complete-binary-tree slots

use crate::core::chumsky_utils::tokenize;
use crate::core::{Adapter, Result, Structure, StructureKind};
use crate::plugins::array::parse_number;
use tracing::{debug, span, Level};

/// Tokens that explicitly mark an empty slot
const ABSENT_MARKERS: &[&str] = &["null", "nil", "none", "_", "-"];

/// Parse delimited text into tree slots
///
/// Every token occupies a slot so that child-index arithmetic stays aligned
/// with what the caller typed. Absent markers and any other non-numeric token
/// become `None`.
///
/// ```rust
/// use algotrace::plugins::tree::to_tree;
///
/// assert_eq!(to_tree("1, null, 3"), vec![Some(1.0), None, Some(3.0)]);
/// ```
pub fn to_tree(raw: &str) -> Vec<Option<f64>> {
    let parse_span = span!(Level::DEBUG, "to_tree", input_len = raw.len());
    let _enter = parse_span.enter();

    let slots: Vec<Option<f64>> = tokenize(raw)
        .into_iter()
        .map(|token| {
            let value = parse_number(token);
            if value.is_none() && !is_absent_marker(token) {
                debug!(token, "Treating unreadable tree token as an absent node");
            }
            value
        })
        .collect();

    debug!(
        slots = slots.len(),
        nodes = slots.iter().flatten().count(),
        "Parsed tree slots"
    );
    slots
}

fn is_absent_marker(token: &str) -> bool {
    ABSENT_MARKERS
        .iter()
        .any(|marker| marker.eq_ignore_ascii_case(token))
}

/// Adapter for [`StructureKind::Tree`]
pub struct TreeAdapter;

impl TreeAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TreeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for TreeAdapter {
    fn kind(&self) -> StructureKind {
        StructureKind::Tree
    }

    fn adapt(&self, raw: &str) -> Result<Structure> {
        Ok(Structure::Tree(to_tree(raw)))
    }

    fn name(&self) -> &'static str {
        "tree"
    }
}
