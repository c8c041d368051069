//! MetaReview - the chair's aggregation of reviews into a decision

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Assessment, Extensible, Progress};
use crate::codec::Record;
use crate::identity::Identity;

/// The chair's aggregation of several reviews of one proposal.
///
/// `reviewer_pks` names the reviews being summarized. The accept/reject
/// `decision` is always present and defaults to reject until the chair
/// rules otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaReview {
    /// Shared progress shape.
    #[serde(flatten)]
    pub progress: Progress,
    /// Key of the proposal being decided.
    #[serde(default)]
    pub proposal_pk: Option<String>,
    /// Key of the chairing profile.
    #[serde(default)]
    pub chair_pk: Option<String>,
    /// Keys of the profiles whose reviews are summarized.
    #[serde(default)]
    pub reviewer_pks: Vec<String>,
    /// Key of the proposal author's profile.
    #[serde(default)]
    pub author_pk: Option<String>,
    /// Graded dimensions with their prompt traces.
    #[serde(flatten)]
    pub assessment: Assessment,
    /// Accept (`true`) or reject (`false`).
    #[serde(default)]
    pub decision: bool,
    /// Undeclared fields, preserved opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetaReview {
    /// Create an empty meta-review with a fresh identity and a reject
    /// decision.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing a meta-review with optional
    /// fields.
    #[must_use]
    pub fn builder() -> MetaReviewBuilder {
        MetaReviewBuilder::default()
    }
}

impl Record for MetaReview {
    const KIND: &'static str = "metareview";

    fn identity(&self) -> &Identity {
        &self.progress.identity
    }
}

impl Extensible for MetaReview {
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }
}

/// Builder for [`MetaReview`].
#[derive(Debug, Default)]
pub struct MetaReviewBuilder {
    metareview: MetaReview,
}

impl MetaReviewBuilder {
    /// Set a caller-chosen primary key.
    #[must_use]
    pub fn pk(mut self, pk: impl Into<String>) -> Self {
        self.metareview.progress.identity.pk = pk.into();
        self
    }

    /// Set the key of the proposal being decided.
    #[must_use]
    pub fn proposal_pk(mut self, proposal_pk: impl Into<String>) -> Self {
        self.metareview.proposal_pk = Some(proposal_pk.into());
        self
    }

    /// Set the key of the chairing profile.
    #[must_use]
    pub fn chair_pk(mut self, chair_pk: impl Into<String>) -> Self {
        self.metareview.chair_pk = Some(chair_pk.into());
        self
    }

    /// Set the keys of the summarized reviewers.
    #[must_use]
    pub fn reviewer_pks(mut self, reviewer_pks: Vec<String>) -> Self {
        self.metareview.reviewer_pks = reviewer_pks;
        self
    }

    /// Set the key of the proposal author's profile.
    #[must_use]
    pub fn author_pk(mut self, author_pk: impl Into<String>) -> Self {
        self.metareview.author_pk = Some(author_pk.into());
        self
    }

    /// Set the graded dimensions.
    #[must_use]
    pub fn assessment(mut self, assessment: Assessment) -> Self {
        self.metareview.assessment = assessment;
        self
    }

    /// Set the accept/reject decision.
    #[must_use]
    pub const fn decision(mut self, decision: bool) -> Self {
        self.metareview.decision = decision;
        self
    }

    /// Build the [`MetaReview`].
    #[must_use]
    pub fn build(self) -> MetaReview {
        self.metareview
    }
}
