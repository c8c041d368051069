//! Activity log - which profile produced which artifact at which timestep
//!
//! One log subtype per progress kind. Entries are append-only from the
//! orchestration layer's point of view: this layer only defines their
//! shape. Every subtype adds exactly one foreign key naming the artifact
//! produced; only the literature-review case leaves it optional, since a
//! review pass may surface nothing new.

use serde::{Deserialize, Serialize};

use crate::codec::Record;
use crate::identity::Identity;

/// Fields shared by every activity-log entry.
///
/// `timestep` is the simulation tick the action happened at, 0 until the
/// scheduler stamps it. `profile_pk` names the acting profile and is
/// required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Log {
    /// Identity base.
    #[serde(flatten)]
    pub identity: Identity,
    /// Simulation tick at which the action occurred.
    #[serde(default)]
    pub timestep: u64,
    /// Key of the acting profile.
    pub profile_pk: String,
}

impl Log {
    /// Create a log core for the acting profile at timestep 0.
    #[must_use]
    pub fn new(profile_pk: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(),
            timestep: 0,
            profile_pk: profile_pk.into(),
        }
    }
}

/// Records a literature-review action.
///
/// `insight_pk` stays absent when the review pass yielded no new insight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiteratureReviewLog {
    /// Shared log fields.
    #[serde(flatten)]
    pub log: Log,
    /// Key of the produced insight, if any.
    #[serde(default)]
    pub insight_pk: Option<String>,
}

impl LiteratureReviewLog {
    /// Create an entry for the acting profile, with no insight attached.
    #[must_use]
    pub fn new(profile_pk: impl Into<String>) -> Self {
        Self {
            log: Log::new(profile_pk),
            insight_pk: None,
        }
    }

    /// Attach the produced insight.
    #[must_use]
    pub fn insight_pk(mut self, insight_pk: impl Into<String>) -> Self {
        self.insight_pk = Some(insight_pk.into());
        self
    }

    /// Stamp the simulation tick.
    #[must_use]
    pub const fn at_timestep(mut self, timestep: u64) -> Self {
        self.log.timestep = timestep;
        self
    }
}

impl Record for LiteratureReviewLog {
    const KIND: &'static str = "literature_review_log";

    fn identity(&self) -> &Identity {
        &self.log.identity
    }
}

/// Records an idea-brainstorm action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdeaBrainstormLog {
    /// Shared log fields.
    #[serde(flatten)]
    pub log: Log,
    /// Key of the produced idea.
    pub idea_pk: String,
}

impl IdeaBrainstormLog {
    /// Create an entry linking the acting profile to the produced idea.
    #[must_use]
    pub fn new(profile_pk: impl Into<String>, idea_pk: impl Into<String>) -> Self {
        Self {
            log: Log::new(profile_pk),
            idea_pk: idea_pk.into(),
        }
    }

    /// Stamp the simulation tick.
    #[must_use]
    pub const fn at_timestep(mut self, timestep: u64) -> Self {
        self.log.timestep = timestep;
        self
    }
}

impl Record for IdeaBrainstormLog {
    const KIND: &'static str = "idea_brainstorm_log";

    fn identity(&self) -> &Identity {
        &self.log.identity
    }
}

/// Records a proposal-writing action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProposalWritingLog {
    /// Shared log fields.
    #[serde(flatten)]
    pub log: Log,
    /// Key of the produced proposal.
    pub proposal_pk: String,
}

impl ProposalWritingLog {
    /// Create an entry linking the acting profile to the produced
    /// proposal.
    #[must_use]
    pub fn new(profile_pk: impl Into<String>, proposal_pk: impl Into<String>) -> Self {
        Self {
            log: Log::new(profile_pk),
            proposal_pk: proposal_pk.into(),
        }
    }

    /// Stamp the simulation tick.
    #[must_use]
    pub const fn at_timestep(mut self, timestep: u64) -> Self {
        self.log.timestep = timestep;
        self
    }
}

impl Record for ProposalWritingLog {
    const KIND: &'static str = "proposal_writing_log";

    fn identity(&self) -> &Identity {
        &self.log.identity
    }
}

/// Records a review-writing action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewWritingLog {
    /// Shared log fields.
    #[serde(flatten)]
    pub log: Log,
    /// Key of the produced review.
    pub review_pk: String,
}

impl ReviewWritingLog {
    /// Create an entry linking the acting profile to the produced review.
    #[must_use]
    pub fn new(profile_pk: impl Into<String>, review_pk: impl Into<String>) -> Self {
        Self {
            log: Log::new(profile_pk),
            review_pk: review_pk.into(),
        }
    }

    /// Stamp the simulation tick.
    #[must_use]
    pub const fn at_timestep(mut self, timestep: u64) -> Self {
        self.log.timestep = timestep;
        self
    }
}

impl Record for ReviewWritingLog {
    const KIND: &'static str = "review_writing_log";

    fn identity(&self) -> &Identity {
        &self.log.identity
    }
}

/// Records a rebuttal-writing action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RebuttalWritingLog {
    /// Shared log fields.
    #[serde(flatten)]
    pub log: Log,
    /// Key of the produced rebuttal.
    pub rebuttal_pk: String,
}

impl RebuttalWritingLog {
    /// Create an entry linking the acting profile to the produced
    /// rebuttal.
    #[must_use]
    pub fn new(profile_pk: impl Into<String>, rebuttal_pk: impl Into<String>) -> Self {
        Self {
            log: Log::new(profile_pk),
            rebuttal_pk: rebuttal_pk.into(),
        }
    }

    /// Stamp the simulation tick.
    #[must_use]
    pub const fn at_timestep(mut self, timestep: u64) -> Self {
        self.log.timestep = timestep;
        self
    }
}

impl Record for RebuttalWritingLog {
    const KIND: &'static str = "rebuttal_writing_log";

    fn identity(&self) -> &Identity {
        &self.log.identity
    }
}

/// Records a meta-review-writing action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaReviewWritingLog {
    /// Shared log fields.
    #[serde(flatten)]
    pub log: Log,
    /// Key of the produced meta-review.
    pub metareview_pk: String,
}

impl MetaReviewWritingLog {
    /// Create an entry linking the acting profile to the produced
    /// meta-review.
    #[must_use]
    pub fn new(profile_pk: impl Into<String>, metareview_pk: impl Into<String>) -> Self {
        Self {
            log: Log::new(profile_pk),
            metareview_pk: metareview_pk.into(),
        }
    }

    /// Stamp the simulation tick.
    #[must_use]
    pub const fn at_timestep(mut self, timestep: u64) -> Self {
        self.log.timestep = timestep;
        self
    }
}

impl Record for MetaReviewWritingLog {
    const KIND: &'static str = "metareview_writing_log";

    fn identity(&self) -> &Identity {
        &self.log.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use serde_json::json;

    #[test]
    fn test_log_defaults_to_timestep_zero() {
        let entry = ProposalWritingLog::new("a1", "p1");
        assert_eq!(entry.log.timestep, 0);
        assert_eq!(entry.log.profile_pk, "a1");
        assert_eq!(entry.proposal_pk, "p1");
    }

    #[test]
    fn test_at_timestep_stamps_tick() {
        let entry = ReviewWritingLog::new("a1", "rev-1").at_timestep(12);
        assert_eq!(entry.log.timestep, 12);
    }

    #[test]
    fn test_literature_review_may_yield_nothing() {
        let empty_handed = LiteratureReviewLog::new("a1").at_timestep(3);
        assert!(empty_handed.insight_pk.is_none());

        let productive = LiteratureReviewLog::new("a1").insight_pk("ins-1");
        assert_eq!(productive.insight_pk.as_deref(), Some("ins-1"));
    }

    #[test]
    fn test_log_requires_profile_pk() {
        let err = codec::from_value::<IdeaBrainstormLog>(json!({ "idea_pk": "i1" })).unwrap_err();
        assert!(err.to_string().contains("profile_pk"));
    }

    #[test]
    fn test_log_requires_artifact_key() {
        let err =
            codec::from_value::<ProposalWritingLog>(json!({ "profile_pk": "a1" })).unwrap_err();
        assert!(err.to_string().contains("proposal_pk"));
    }

    #[test]
    fn test_log_roundtrip_flat_document() {
        let entry = MetaReviewWritingLog::new("a1", "mr-1").at_timestep(7);
        let value = codec::to_value(&entry).unwrap();
        assert_eq!(value["timestep"], 7);
        assert_eq!(value["metareview_pk"], "mr-1");
        let back: MetaReviewWritingLog = codec::from_value(value).unwrap();
        assert_eq!(entry, back);
    }
}
