//! Core error types for trace building and playback
//!
//! Adapter failures and caller wiring bugs are errors. Conditions that happen
//! inside an algorithm (target not found, an exhausted queue, an absent tree
//! node) are never errors; they show up as terminal steps in the trace.

use thiserror::Error;

use super::StructureKind;

/// Core error types for the trace engine
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Malformed {kind} input: {message}")]
    MalformedInput { kind: StructureKind, message: String },

    #[error("Unknown algorithm '{algorithm}' for structure '{kind}'")]
    UnknownAlgorithm {
        kind: StructureKind,
        algorithm: String,
    },

    #[error("Unknown structure type: {name}")]
    UnknownStructure { name: String },

    #[error("Algorithm '{algorithm}' expects a {expected} structure, got {actual}")]
    StructureMismatch {
        algorithm: String,
        expected: StructureKind,
        actual: StructureKind,
    },

    #[error("Algorithm '{algorithm}' requires a search target")]
    MissingTarget { algorithm: String },

    #[error("Invalid playback speed: {speed} (must be positive and finite)")]
    InvalidSpeed { speed: f64 },

    #[error("Index {index} out of range for structure of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Node editing is not supported for {kind} structures")]
    UnsupportedEdit { kind: StructureKind },
}

impl TraceError {
    /// Create a new malformed input error
    pub fn malformed(kind: StructureKind, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            kind,
            message: message.into(),
        }
    }

    /// Create a new unknown algorithm error
    pub fn unknown_algorithm(kind: StructureKind, algorithm: impl Into<String>) -> Self {
        Self::UnknownAlgorithm {
            kind,
            algorithm: algorithm.into(),
        }
    }

    /// Create a new structure mismatch error
    pub fn structure_mismatch(
        algorithm: impl Into<String>,
        expected: StructureKind,
        actual: StructureKind,
    ) -> Self {
        Self::StructureMismatch {
            algorithm: algorithm.into(),
            expected,
            actual,
        }
    }

    /// Create a new missing target error
    pub fn missing_target(algorithm: impl Into<String>) -> Self {
        Self::MissingTarget {
            algorithm: algorithm.into(),
        }
    }

    /// Whether the caller should keep its previous structure and carry on
    ///
    /// Only malformed input is a user-facing condition; everything else is a
    /// wiring bug in the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

/// Result alias used throughout the engine
pub type Result<T, E = TraceError> = std::result::Result<T, E>;
