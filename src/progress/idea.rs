//! Idea - brainstormed research direction

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Extensible, Progress};
use crate::codec::Record;
use crate::identity::Identity;

/// A brainstormed research idea.
///
/// Like [`Insight`](super::Insight), the declared schema is just the
/// shared progress shape plus the extension map.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Idea {
    /// Shared progress shape.
    #[serde(flatten)]
    pub progress: Progress,
    /// Undeclared fields, preserved opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Idea {
    /// Create an empty idea with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Record for Idea {
    const KIND: &'static str = "idea";

    fn identity(&self) -> &Identity {
        &self.progress.identity
    }
}

impl Extensible for Idea {
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }
}
