//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the shared data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod grid;

// Re-export commonly used types at the crate root
pub use cell::CellValue;
pub use grid::Grid;
