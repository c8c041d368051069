//! Error types for ScholarSim
//!
//! Construction of typed records cannot fail; every failure in this crate
//! originates at the untyped boundary where records are reconstructed from
//! stored documents.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// ScholarSim error types
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing, or a field's value cannot be coerced
    /// to its declared shape
    #[error("validation failed for {kind} record: {message}")]
    Validation {
        /// Record kind being reconstructed
        kind: &'static str,
        /// What the document got wrong
        message: String,
    },

    /// The payload is structurally wrong (e.g. a scalar or an array where
    /// a record document is expected)
    #[error("{kind} record must be a JSON {expected}, got {found}")]
    Shape {
        /// Record kind being reconstructed
        kind: &'static str,
        /// Expected JSON shape
        expected: &'static str,
        /// Shape actually found
        found: &'static str,
    },

    /// The input is not valid JSON, or a record failed to serialize
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}
