//! FILENAME: engine/src/grid.rs
//! PURPOSE: Manages the collection of cells (The Data Grid).
//! CONTEXT: This file defines the `Grid` struct, a dense row-major
//! container of `CellValue`s. The data sets it carries are rectangular
//! ranges handed over by a host (e.g. a selected sheet range), so a dense
//! representation is the natural fit. Rectangularity is not enforced on
//! construction; consumers that require it validate before reading.

use serde::{Deserialize, Serialize};
use crate::cell::CellValue;

/// A dense, row-major grid of scalar cell values.
/// Rows and columns are 0-based indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Row-major storage: `rows[i][j]` is the cell at row i, column j.
    pub rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Creates a new, empty Grid.
    pub fn new() -> Self {
        Grid { rows: Vec::new() }
    }

    /// Creates a Grid from pre-built rows.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Grid { rows }
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the grid, taken from the first row.
    /// Returns 0 for a grid with no rows.
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Retrieves a reference to the cell at the specified coordinates.
    /// Returns None when the coordinates fall outside the stored rows.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
