//! FILENAME: unpivot-engine/src/definition.rs
//! Unpivot Definition - The serializable configuration.
//!
//! This module contains all the types needed to DESCRIBE an unpivot
//! transform. These structures are designed to be:
//! - Serializable (for saving/loading host documents)
//! - Sent over a host bridge
//! - Immutable snapshots of caller intent

use serde::{Deserialize, Serialize};
use engine::CellValue;

// ============================================================================
// EMPTY-VALUE POLICY
// ============================================================================

/// How empty cells in the value region are treated.
///
/// An explicit tagged variant: a replacement literal that happens to be
/// falsy can never be confused with the skip policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EmptyValuePolicy {
    /// Omit the (row, column) pair entirely.
    Skip,
    /// Emit the pair with an empty text value.
    IncludeAsEmpty,
    /// Emit the pair with the given literal in place of the empty cell.
    Replace(Replacement),
}

impl Default for EmptyValuePolicy {
    fn default() -> Self {
        EmptyValuePolicy::Skip
    }
}

/// The literal substituted for an empty cell under
/// [`EmptyValuePolicy::Replace`]. Text and numeric replacements are both
/// first-class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Replacement {
    Text(String),
    Number(f64),
}

impl Replacement {
    /// The cell emitted into the output grid for this replacement.
    pub fn to_cell_value(&self) -> CellValue {
        match self {
            Replacement::Text(s) => CellValue::Text(s.clone()),
            Replacement::Number(n) => CellValue::Number(*n),
        }
    }
}

// ============================================================================
// SIZING STRATEGY
// ============================================================================

/// How the output container is allocated.
///
/// Not part of the observable contract: both strategies produce identical
/// grids. `ExactCount` runs a counting pass first and allocates once;
/// `GrowOnDemand` appends as pairs are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SizingStrategy {
    GrowOnDemand,
    #[default]
    ExactCount,
}

// ============================================================================
// MAIN DEFINITION STRUCT
// ============================================================================

/// The complete, serializable definition of an unpivot transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnpivotDefinition {
    /// Number of leading columns carried through unchanged as row identity.
    #[serde(default = "default_fixed_cols")]
    pub fixed_cols: usize,

    /// Number of leading header rows; only 1 or 2 are legal.
    #[serde(default = "default_fixed_rows")]
    pub fixed_rows: usize,

    /// Label for the generated attribute-name output column.
    #[serde(default = "default_attribute_col")]
    pub attribute_col: String,

    /// Label for the generated value output column.
    #[serde(default = "default_value_col")]
    pub value_col: String,

    /// Treatment of empty cells in the value region.
    #[serde(default)]
    pub empty_value: EmptyValuePolicy,

    /// Output allocation strategy.
    #[serde(default)]
    pub sizing: SizingStrategy,
}

fn default_fixed_cols() -> usize {
    1
}

fn default_fixed_rows() -> usize {
    1
}

fn default_attribute_col() -> String {
    "Attribute".to_string()
}

fn default_value_col() -> String {
    "Value".to_string()
}

impl Default for UnpivotDefinition {
    fn default() -> Self {
        UnpivotDefinition {
            fixed_cols: default_fixed_cols(),
            fixed_rows: default_fixed_rows(),
            attribute_col: default_attribute_col(),
            value_col: default_value_col(),
            empty_value: EmptyValuePolicy::default(),
            sizing: SizingStrategy::default(),
        }
    }
}

impl UnpivotDefinition {
    /// Creates a definition with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of every output row: the fixed prefix plus the attribute and
    /// value columns.
    pub fn output_width(&self) -> usize {
        self.fixed_cols + 2
    }
}
