//! Serialization boundary for schema records
//!
//! Records serialize to flat JSON documents: embedded shapes (identity,
//! shared progress fields, graded dimensions) are flattened into the top
//! level, nested fields serialize as arrays and objects of primitives.
//!
//! Decoding classifies failures into the crate taxonomy: a payload that is
//! not a JSON object is a [`Error::Shape`] failure, a document missing a
//! required field or carrying an uncoercible value is a
//! [`Error::Validation`] failure, and unparseable input is
//! [`Error::Malformed`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::identity::Identity;

/// Behavior shared by every record in the schema.
///
/// The trait is the seam the codec works through: a stable kind name for
/// error reports, access to the identity base, and the serde bounds that
/// make the record a flat document.
pub trait Record: Serialize + DeserializeOwned {
    /// Stable kind name, used in error reports and decode events.
    const KIND: &'static str;

    /// The identity base carried by the record.
    fn identity(&self) -> &Identity;

    /// Primary key.
    fn pk(&self) -> &str {
        &self.identity().pk
    }

    /// Project tag, if any.
    fn project_name(&self) -> Option<&str> {
        self.identity().project_name.as_deref()
    }
}

/// Serialize a record to a flat JSON document.
///
/// # Errors
///
/// Returns [`Error::Malformed`] if the record fails to serialize.
pub fn to_value<R: Record>(record: &R) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Serialize a record to a JSON string.
///
/// # Errors
///
/// Returns [`Error::Malformed`] if the record fails to serialize.
pub fn to_json<R: Record>(record: &R) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Reconstruct a record from a JSON document.
///
/// Required fields must be present with coercible values; optional fields
/// absent from the document take their declared defaults, including a
/// freshly generated `pk`. Undeclared fields on extensible records are
/// routed into their extension map.
///
/// # Errors
///
/// Returns [`Error::Shape`] if the payload is not a JSON object, or
/// [`Error::Validation`] if a required field is missing or a value cannot
/// be coerced to its declared shape.
pub fn from_value<R: Record>(value: Value) -> Result<R> {
    if !value.is_object() {
        return Err(Error::Shape {
            kind: R::KIND,
            expected: "object",
            found: value_shape(&value),
        });
    }
    match serde_json::from_value(value) {
        Ok(record) => {
            trace!(kind = R::KIND, "record reconstructed");
            Ok(record)
        }
        Err(err) => {
            debug!(kind = R::KIND, error = %err, "record validation failed");
            Err(Error::Validation {
                kind: R::KIND,
                message: err.to_string(),
            })
        }
    }
}

/// Reconstruct a record from a JSON string.
///
/// # Errors
///
/// Returns [`Error::Malformed`] if the input is not valid JSON, otherwise
/// fails as [`from_value`] does.
pub fn from_json<R: Record>(json: &str) -> Result<R> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

fn value_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use serde_json::json;

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = from_value::<Profile>(json!("not a record")).unwrap_err();
        assert!(matches!(
            err,
            Error::Shape {
                kind: "profile",
                expected: "object",
                found: "string",
            }
        ));
    }

    #[test]
    fn test_from_value_rejects_missing_required_field() {
        let err = from_value::<Profile>(json!({ "name": "Ada" })).unwrap_err();
        match err {
            Error::Validation { kind, message } => {
                assert_eq!(kind, "profile");
                assert!(message.contains("bio"), "unexpected message: {message}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_unparseable_input() {
        let err = from_json::<Profile>("{not json").unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_roundtrip_through_document() {
        let profile = Profile::new("Ada Lovelace", "Analytical engines");
        let value = to_value(&profile).unwrap();
        let back: Profile = from_value(value).unwrap();
        assert_eq!(profile, back);
    }
}
