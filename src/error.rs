use thiserror::Error;

/// Errors that can occur while applying structural patch operations.
///
/// Every variant names the index of the offending operation so that a
/// malformed, externally generated patch list is diagnosable instead of
/// silently degrading to a no-op.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchError {
    #[error("Operation #{op_index}: path '{path}' does not resolve to an existing location")]
    PathNotFound { op_index: usize, path: String },

    #[error("Operation #{op_index}: index {index} is out of range for an array of length {len}")]
    IndexOutOfRange {
        op_index: usize,
        index: usize,
        len: usize,
    },

    #[error(
        "Operation #{op_index}: segment '{segment}' addresses a {found}, which cannot be indexed this way"
    )]
    TypeMismatch {
        op_index: usize,
        segment: String,
        found: String,
    },

    #[error("Operation #{op_index}: '{op}' requires a value, but none was provided")]
    MissingValue { op_index: usize, op: String },

    #[error("Operation #{op_index}: an empty path cannot be patched")]
    EmptyPath { op_index: usize },

    #[error("Patched document no longer matches the form document shape: {0}")]
    InvalidDocument(String),
}

/// Errors that can occur at the JSON boundary when loading or emitting a
/// form document.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse form document JSON: {0}")]
    Parse(String),

    #[error("Failed to serialize form document: {0}")]
    Serialize(String),
}
