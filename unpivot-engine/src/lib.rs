//! FILENAME: unpivot-engine/src/lib.rs
//! Unpivot subsystem.
//!
//! This crate provides the wide-to-long reshaping engine as a standalone
//! module. It depends on `engine` only for shared types (CellValue, Grid).
//!
//! Layers:
//! - `definition`: Serializable configuration (what the transform IS)
//! - `engine`: The transform itself (HOW we reshape)
//! - `directory`: Host introspection (WHAT is callable, and its version)

pub mod definition;
pub mod directory;
pub mod engine;
pub mod error;

pub use definition::*;
pub use directory::{directory, version, FunctionInfo};
pub use error::UnpivotError;
// `self::` keeps the module distinct from the `engine` dependency crate.
pub use self::engine::unpivot;
