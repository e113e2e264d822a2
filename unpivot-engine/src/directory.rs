//! FILENAME: unpivot-engine/src/directory.rs
//! Host introspection: which operations this library exposes, and at what
//! version. Loader layers surface this to end users ("list functions",
//! "version info") after making the entry points callable.

use serde::{Deserialize, Serialize};

/// Descriptor for one callable operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// Host-facing operation name.
    pub name: String,
    /// One-line description shown in function listings.
    pub description: String,
}

/// Returns the set of operations a host can call after loading this
/// library.
pub fn directory() -> Vec<FunctionInfo> {
    vec![FunctionInfo {
        name: "UNPIVOT".to_string(),
        description: "Reshape a wide data range into entity-attribute-value rows".to_string(),
    }]
}

/// The version identifier reported alongside the directory.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
