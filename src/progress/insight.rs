//! Insight - literature-review output

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Extensible, Progress};
use crate::codec::Record;
use crate::identity::Identity;

/// Literature-review output.
///
/// Carries no fields beyond the shared progress shape; the extension map
/// absorbs whatever an experimental literature agent adds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    /// Shared progress shape.
    #[serde(flatten)]
    pub progress: Progress,
    /// Undeclared fields, preserved opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Insight {
    /// Create an empty insight with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Record for Insight {
    const KIND: &'static str = "insight";

    fn identity(&self) -> &Identity {
        &self.progress.identity
    }
}

impl Extensible for Insight {
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use serde_json::json;

    #[test]
    fn test_insight_defaults() {
        let insight = Insight::new();
        assert!(insight.progress.content.is_empty());
        assert!(insight.extra.is_empty());
    }

    #[test]
    fn test_insight_extension_fields_roundtrip() {
        let mut insight = Insight::new();
        insight.progress.content = "Transformers dominate the field.".to_string();
        insight.set_extra("novelty", json!(0.7));
        insight.set_extra("sources", json!(["paper-1", "paper-2"]));

        let value = codec::to_value(&insight).unwrap();
        assert_eq!(value["novelty"], json!(0.7));

        let back: Insight = codec::from_value(value).unwrap();
        assert_eq!(insight, back);
        assert_eq!(back.get_extra("sources"), Some(&json!(["paper-1", "paper-2"])));
    }
}
