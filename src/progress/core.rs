//! Shared progress shape embedded by every work artifact

use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::prompt::Message;

/// Fields shared by every work artifact.
///
/// Embedded by value in each subtype and flattened on the wire, so the
/// serialized document carries `pk`, `content`, `prompt_messages` and
/// `eval_score` at the top level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// Identity base.
    #[serde(flatten)]
    pub identity: Identity,
    /// Free-text content of the artifact.
    #[serde(default)]
    pub content: String,
    /// Prompt exchange that produced the content.
    #[serde(default)]
    pub prompt_messages: Vec<Message>,
    /// Scores assigned by evaluators; one entry per evaluator.
    #[serde(default)]
    pub eval_score: Vec<i32>,
}

impl Progress {
    /// Create an empty progress shape with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
