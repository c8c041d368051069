//! Review - one reviewer's graded assessment of a proposal

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Assessment, Extensible, Progress};
use crate::codec::Record;
use crate::identity::Identity;

/// One reviewer's assessment of a proposal.
///
/// The proposal and reviewer keys are optional at construction; the
/// orchestration layer fills them in once the assignment is known. All
/// graded dimensions start absent and are written as the reviewing agent
/// produces them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Shared progress shape.
    #[serde(flatten)]
    pub progress: Progress,
    /// Key of the proposal under review.
    #[serde(default)]
    pub proposal_pk: Option<String>,
    /// Key of the reviewing profile.
    #[serde(default)]
    pub reviewer_pk: Option<String>,
    /// Graded dimensions with their prompt traces.
    #[serde(flatten)]
    pub assessment: Assessment,
    /// Overall score.
    #[serde(default)]
    pub score: Option<i32>,
    /// Undeclared fields, preserved opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Review {
    /// Create an empty review with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing a review with optional fields.
    #[must_use]
    pub fn builder() -> ReviewBuilder {
        ReviewBuilder::default()
    }
}

impl Record for Review {
    const KIND: &'static str = "review";

    fn identity(&self) -> &Identity {
        &self.progress.identity
    }
}

impl Extensible for Review {
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }
}

/// Builder for [`Review`].
#[derive(Debug, Default)]
pub struct ReviewBuilder {
    review: Review,
}

impl ReviewBuilder {
    /// Set a caller-chosen primary key.
    #[must_use]
    pub fn pk(mut self, pk: impl Into<String>) -> Self {
        self.review.progress.identity.pk = pk.into();
        self
    }

    /// Set the key of the proposal under review.
    #[must_use]
    pub fn proposal_pk(mut self, proposal_pk: impl Into<String>) -> Self {
        self.review.proposal_pk = Some(proposal_pk.into());
        self
    }

    /// Set the key of the reviewing profile.
    #[must_use]
    pub fn reviewer_pk(mut self, reviewer_pk: impl Into<String>) -> Self {
        self.review.reviewer_pk = Some(reviewer_pk.into());
        self
    }

    /// Set the graded dimensions.
    #[must_use]
    pub fn assessment(mut self, assessment: Assessment) -> Self {
        self.review.assessment = assessment;
        self
    }

    /// Set the overall score.
    #[must_use]
    pub const fn score(mut self, score: i32) -> Self {
        self.review.score = Some(score);
        self
    }

    /// Build the [`Review`].
    #[must_use]
    pub fn build(self) -> Review {
        self.review
    }
}
