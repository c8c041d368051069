//! Graded dimensions shared by reviews and meta-reviews

use serde::{Deserialize, Serialize};

use crate::prompt::Message;

/// The four graded dimensions of a review, each keeping the prompt
/// exchange that produced it.
///
/// Embedded by value in [`Review`](crate::progress::Review) and
/// [`MetaReview`](crate::progress::MetaReview) and flattened on the wire,
/// so both serialize the dimensions as flat `summary`,
/// `summary_prompt_messages`, ... fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assessment {
    /// Summary of the proposal under review.
    #[serde(default)]
    pub summary: Option<String>,
    /// Prompt exchange behind the summary.
    #[serde(default)]
    pub summary_prompt_messages: Vec<Message>,
    /// Strengths.
    #[serde(default)]
    pub strength: Option<String>,
    /// Prompt exchange behind the strengths.
    #[serde(default)]
    pub strength_prompt_messages: Vec<Message>,
    /// Weaknesses.
    #[serde(default)]
    pub weakness: Option<String>,
    /// Prompt exchange behind the weaknesses.
    #[serde(default)]
    pub weakness_prompt_messages: Vec<Message>,
    /// Ethical concerns, if the reviewer raised any.
    #[serde(default)]
    pub ethical_concern: Option<String>,
    /// Prompt exchange behind the ethical concerns.
    #[serde(default)]
    pub ethical_concern_prompt_messages: Vec<Message>,
}
