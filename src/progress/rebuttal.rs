//! Rebuttal - the authors' reply to a review

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Extensible, Progress};
use crate::codec::Record;
use crate::identity::Identity;

/// The authors' reply to one review, answering the same five-question
/// template the proposal was written against.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rebuttal {
    /// Shared progress shape.
    #[serde(flatten)]
    pub progress: Progress,
    /// Reply on template question 1.
    #[serde(default)]
    pub q1: Option<String>,
    /// Reply on template question 2.
    #[serde(default)]
    pub q2: Option<String>,
    /// Reply on template question 3.
    #[serde(default)]
    pub q3: Option<String>,
    /// Reply on template question 4.
    #[serde(default)]
    pub q4: Option<String>,
    /// Reply on template question 5.
    #[serde(default)]
    pub q5: Option<String>,
    /// Key of the proposal being defended.
    #[serde(default)]
    pub proposal_pk: Option<String>,
    /// Key of the reviewer being answered.
    #[serde(default)]
    pub reviewer_pk: Option<String>,
    /// Key of the replying author's profile.
    #[serde(default)]
    pub author_pk: Option<String>,
    /// Undeclared fields, preserved opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Rebuttal {
    /// Create an empty rebuttal with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing a rebuttal with optional fields.
    #[must_use]
    pub fn builder() -> RebuttalBuilder {
        RebuttalBuilder::default()
    }
}

impl Record for Rebuttal {
    const KIND: &'static str = "rebuttal";

    fn identity(&self) -> &Identity {
        &self.progress.identity
    }
}

impl Extensible for Rebuttal {
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }
}

/// Builder for [`Rebuttal`].
#[derive(Debug, Default)]
pub struct RebuttalBuilder {
    rebuttal: Rebuttal,
}

impl RebuttalBuilder {
    /// Set a caller-chosen primary key.
    #[must_use]
    pub fn pk(mut self, pk: impl Into<String>) -> Self {
        self.rebuttal.progress.identity.pk = pk.into();
        self
    }

    /// Set the key of the proposal being defended.
    #[must_use]
    pub fn proposal_pk(mut self, proposal_pk: impl Into<String>) -> Self {
        self.rebuttal.proposal_pk = Some(proposal_pk.into());
        self
    }

    /// Set the key of the reviewer being answered.
    #[must_use]
    pub fn reviewer_pk(mut self, reviewer_pk: impl Into<String>) -> Self {
        self.rebuttal.reviewer_pk = Some(reviewer_pk.into());
        self
    }

    /// Set the key of the replying author's profile.
    #[must_use]
    pub fn author_pk(mut self, author_pk: impl Into<String>) -> Self {
        self.rebuttal.author_pk = Some(author_pk.into());
        self
    }

    /// Set the reply on template question 1.
    #[must_use]
    pub fn q1(mut self, q1: impl Into<String>) -> Self {
        self.rebuttal.q1 = Some(q1.into());
        self
    }

    /// Set the reply on template question 2.
    #[must_use]
    pub fn q2(mut self, q2: impl Into<String>) -> Self {
        self.rebuttal.q2 = Some(q2.into());
        self
    }

    /// Set the reply on template question 3.
    #[must_use]
    pub fn q3(mut self, q3: impl Into<String>) -> Self {
        self.rebuttal.q3 = Some(q3.into());
        self
    }

    /// Set the reply on template question 4.
    #[must_use]
    pub fn q4(mut self, q4: impl Into<String>) -> Self {
        self.rebuttal.q4 = Some(q4.into());
        self
    }

    /// Set the reply on template question 5.
    #[must_use]
    pub fn q5(mut self, q5: impl Into<String>) -> Self {
        self.rebuttal.q5 = Some(q5.into());
        self
    }

    /// Build the [`Rebuttal`].
    #[must_use]
    pub fn build(self) -> Rebuttal {
        self.rebuttal
    }
}
