//! Tests for error types

use serde_json::json;

use scholarsim::codec;
use scholarsim::paper::Paper;
use scholarsim::progress::Insight;
use scholarsim::Error;

#[test]
fn test_validation_error_display() {
    let error = Error::Validation {
        kind: "proposal",
        message: "missing field `abstract`".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("validation failed"));
    assert!(error_str.contains("proposal"));
    assert!(error_str.contains("missing field `abstract`"));
}

#[test]
fn test_shape_error_display() {
    let error = Error::Shape {
        kind: "insight",
        expected: "object",
        found: "array",
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("insight"));
    assert!(error_str.contains("object"));
    assert!(error_str.contains("array"));
}

#[test]
fn test_malformed_error_display() {
    let error = codec::from_json::<Insight>("][").unwrap_err();
    let error_str = format!("{error}");
    assert!(error_str.contains("malformed document"));
}

#[test]
fn test_codec_failures_map_to_taxonomy() {
    // Not an object at all.
    assert!(matches!(
        codec::from_value::<Paper>(json!(3.5)).unwrap_err(),
        Error::Shape { .. }
    ));
    // An object, but missing a required field.
    assert!(matches!(
        codec::from_value::<Paper>(json!({})).unwrap_err(),
        Error::Validation { .. }
    ));
    // Not JSON.
    assert!(matches!(
        codec::from_json::<Paper>("not json").unwrap_err(),
        Error::Malformed(_)
    ));
}

#[test]
fn test_errors_are_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(Error::Validation {
        kind: "review",
        message: "bad score".to_string(),
    });
    assert!(error.to_string().contains("review"));
}
