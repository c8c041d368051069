//! Record identity - primary keys and project tagging
//!
//! Every record in the schema carries an [`Identity`]: a globally unique
//! primary key plus an optional project grouping tag. The identity is
//! embedded by value in each record type and flattened at the
//! serialization boundary, so documents stay flat.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh primary key.
///
/// Keys are 128-bit random tokens rendered as text, so keys generated by
/// concurrent constructors collide with negligible probability and no
/// shared counter or registry is involved.
#[must_use]
pub fn fresh_pk() -> String {
    Uuid::new_v4().to_string()
}

/// Identity shared by every record.
///
/// A missing `pk` in a stored document gets a freshly generated key on
/// reconstruction, mirroring construction-time defaulting. The key is
/// stable for the record's lifetime; content fields around it may mutate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Primary key, unique across all records.
    #[serde(default = "fresh_pk")]
    pub pk: String,
    /// Optional grouping tag. No uniqueness constraint.
    #[serde(default)]
    pub project_name: Option<String>,
}

impl Identity {
    /// Create an identity with a freshly generated key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pk: fresh_pk(),
            project_name: None,
        }
    }

    /// Create an identity with a caller-chosen key, for deterministic
    /// tests or reconstruction from storage.
    #[must_use]
    pub fn with_pk(pk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            project_name: None,
        }
    }
}

impl Default for Identity {
    /// Fresh key per call; two defaulted identities never share a key.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_pk_nonempty_and_distinct() {
        let a = fresh_pk();
        let b = fresh_pk();
        assert!(!a.is_empty());
        assert!(!b.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_generates_distinct_keys() {
        let a = Identity::default();
        let b = Identity::default();
        assert_ne!(a.pk, b.pk);
        assert!(a.project_name.is_none());
    }

    #[test]
    fn test_with_pk_preserves_caller_key() {
        let id = Identity::with_pk("fixed-key");
        assert_eq!(id.pk, "fixed-key");
    }

    #[test]
    fn test_missing_pk_defaults_on_deserialization() {
        let id: Identity = serde_json::from_str("{}").unwrap();
        assert!(!id.pk.is_empty());
    }
}
