//! FILENAME: unpivot-engine/src/engine.rs
//! Unpivot Engine - The transform core that reshapes wide data into long rows.
//!
//! This module takes an UnpivotDefinition (configuration) and a Grid (data)
//! and produces a new Grid: the output header row followed by one row per
//! eligible (input row, value column) pair.
//!
//! Algorithm:
//! 1. Validate parameters and grid shape
//! 2. Derive the effective header row (merging two header rows if present)
//! 3. Walk the data region, expanding each eligible wide row
//! 4. Return the assembled grid

use smallvec::SmallVec;
use engine::{CellValue, Grid};
use crate::definition::{EmptyValuePolicy, SizingStrategy, UnpivotDefinition};
use crate::error::UnpivotError;

/// Reshapes `data` from wide form into long form according to `definition`.
///
/// The input grid is borrowed and never mutated; a freshly allocated grid
/// comes back. Fails fast with a validation error on an illegal
/// configuration or a non-rectangular grid, never with a partial result.
pub fn unpivot(data: &Grid, definition: &UnpivotDefinition) -> Result<Grid, UnpivotError> {
    Unpivoter::new(data, definition).run()
}

// ============================================================================
// UNPIVOTER
// ============================================================================

/// Single-call transform state: the borrowed inputs plus the grid width,
/// which every stage reads.
struct Unpivoter<'a> {
    data: &'a Grid,
    definition: &'a UnpivotDefinition,
    width: usize,
}

impl<'a> Unpivoter<'a> {
    fn new(data: &'a Grid, definition: &'a UnpivotDefinition) -> Self {
        Unpivoter {
            data,
            definition,
            width: data.col_count(),
        }
    }

    /// Executes the full transform and returns the assembled grid.
    fn run(&self) -> Result<Grid, UnpivotError> {
        self.validate()?;

        let headers = self.effective_headers();

        let mut rows: Vec<Vec<CellValue>> = match self.definition.sizing {
            SizingStrategy::ExactCount => Vec::with_capacity(self.count_output_rows()),
            SizingStrategy::GrowOnDemand => Vec::new(),
        };

        rows.push(self.output_header_row(&headers));

        for row in &self.data.rows[self.definition.fixed_rows..] {
            if !self.row_is_eligible(row) {
                continue;
            }

            // Cache the identity prefix once per input row; it is cloned
            // into every pair the row expands to.
            let fixed: SmallVec<[CellValue; 4]> =
                row[..self.definition.fixed_cols].iter().cloned().collect();

            for j in self.definition.fixed_cols..self.width {
                let resolved = match self.resolve_value(&row[j]) {
                    Some(value) => value,
                    None => continue,
                };

                let mut out = Vec::with_capacity(self.definition.output_width());
                out.extend(fixed.iter().cloned());
                out.push(headers[j].clone());
                out.push(resolved);
                rows.push(out);
            }
        }

        Ok(Grid::from_rows(rows))
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    fn validate(&self) -> Result<(), UnpivotError> {
        let fixed_rows = self.definition.fixed_rows;
        if fixed_rows < 1 || fixed_rows > 2 {
            return Err(UnpivotError::InvalidParameters(format!(
                "fixed_rows must be 1 or 2, got {}",
                fixed_rows
            )));
        }

        if self.data.row_count() < fixed_rows {
            return Err(UnpivotError::InsufficientRows {
                rows: self.data.row_count(),
                fixed_rows,
            });
        }

        if self.definition.fixed_cols > self.width {
            return Err(UnpivotError::InvalidParameters(format!(
                "fixed_cols is {} but the grid is only {} column(s) wide",
                self.definition.fixed_cols, self.width
            )));
        }

        // Strict rectangularity: a short row would otherwise read past its
        // end somewhere below.
        for (i, row) in self.data.rows.iter().enumerate() {
            if row.len() != self.width {
                return Err(UnpivotError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: self.width,
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // HEADERS
    // ========================================================================

    /// Derives one label cell per wide column.
    ///
    /// With a single header row the first row is used verbatim. With two,
    /// each value column merges its pair of header cells: row 2 fills a
    /// blank row-1 header, two non-blank headers concatenate as
    /// "{row1} - {row2}", and a blank row-2 header leaves row 1 unchanged.
    /// Fixed columns always keep their row-1 header.
    fn effective_headers(&self) -> Vec<CellValue> {
        let mut headers = self.data.rows[0].clone();

        if self.definition.fixed_rows == 2 {
            let second = &self.data.rows[1];
            for j in self.definition.fixed_cols..self.width {
                if second[j].is_empty() {
                    continue;
                }
                if headers[j].is_empty() {
                    headers[j] = second[j].clone();
                } else {
                    headers[j] = CellValue::Text(format!(
                        "{} - {}",
                        headers[j].display_value(),
                        second[j].display_value()
                    ));
                }
            }
        }

        headers
    }

    /// Output header row: fixed-column headers, then the two generated
    /// column labels.
    fn output_header_row(&self, headers: &[CellValue]) -> Vec<CellValue> {
        let mut row = Vec::with_capacity(self.definition.output_width());
        row.extend(headers[..self.definition.fixed_cols].iter().cloned());
        row.push(CellValue::Text(self.definition.attribute_col.clone()));
        row.push(CellValue::Text(self.definition.value_col.clone()));
        row
    }

    // ========================================================================
    // ELIGIBILITY & RESOLUTION
    // ========================================================================

    /// A data row is skipped when every one of its identity cells is
    /// empty. With zero fixed columns there is no identity to test and
    /// every row is eligible.
    fn row_is_eligible(&self, row: &[CellValue]) -> bool {
        let fixed = &row[..self.definition.fixed_cols];
        fixed.is_empty() || fixed.iter().any(|cell| !cell.is_empty())
    }

    /// Whether a value cell produces an output row. Must agree with
    /// `resolve_value`; the counting pass relies on it.
    fn cell_is_included(&self, cell: &CellValue) -> bool {
        !cell.is_empty() || self.definition.empty_value != EmptyValuePolicy::Skip
    }

    /// The value emitted for a cell, or None when the pair is skipped.
    fn resolve_value(&self, cell: &CellValue) -> Option<CellValue> {
        if !cell.is_empty() {
            return Some(cell.clone());
        }
        match &self.definition.empty_value {
            EmptyValuePolicy::Skip => None,
            EmptyValuePolicy::IncludeAsEmpty => Some(CellValue::Text(String::new())),
            EmptyValuePolicy::Replace(replacement) => Some(replacement.to_cell_value()),
        }
    }

    /// Counting pass for exact allocation: applies the same row and cell
    /// filters as the emission pass, plus one for the header row.
    fn count_output_rows(&self) -> usize {
        let mut count = 1;
        for row in &self.data.rows[self.definition.fixed_rows..] {
            if !self.row_is_eligible(row) {
                continue;
            }
            count += row[self.definition.fixed_cols..]
                .iter()
                .filter(|cell| self.cell_is_included(cell))
                .count();
        }
        count
    }
}
