//! FILENAME: unpivot-engine/src/error.rs

use thiserror::Error;

/// Validation failures raised before any output is produced.
/// There is no partial-result mode: either a complete grid comes back or
/// one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnpivotError {
    #[error("insufficient rows: grid has {rows} row(s), need at least {fixed_rows}")]
    InsufficientRows { rows: usize, fixed_rows: usize },

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("ragged row: row {row} has {len} cell(s), expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}
