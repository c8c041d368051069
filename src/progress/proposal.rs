//! Proposal - a written research proposal

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Extensible, Progress};
use crate::codec::Record;
use crate::identity::Identity;

/// A research proposal written against the five-question template.
///
/// `q1`..`q5` hold the structured answers when the writing agent follows
/// the template; free-form proposals leave them absent and use `content`.
/// The abstract is the one always-present piece and defaults to empty
/// until the agent fills it in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Proposal {
    /// Shared progress shape.
    #[serde(flatten)]
    pub progress: Progress,
    /// Answer to template question 1 (problem).
    #[serde(default)]
    pub q1: Option<String>,
    /// Answer to template question 2 (importance).
    #[serde(default)]
    pub q2: Option<String>,
    /// Answer to template question 3 (difficulty).
    #[serde(default)]
    pub q3: Option<String>,
    /// Answer to template question 4 (prior work gap).
    #[serde(default)]
    pub q4: Option<String>,
    /// Answer to template question 5 (key components).
    #[serde(default)]
    pub q5: Option<String>,
    /// Keys of cited papers.
    #[serde(default)]
    pub citations: Vec<String>,
    /// Proposal abstract.
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    /// Proposal title.
    #[serde(default)]
    pub title: Option<String>,
    /// Target conference.
    #[serde(default)]
    pub conference: Option<String>,
    /// Undeclared fields, preserved opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Proposal {
    /// Create an empty proposal with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing a proposal with optional fields.
    #[must_use]
    pub fn builder() -> ProposalBuilder {
        ProposalBuilder::default()
    }
}

impl Record for Proposal {
    const KIND: &'static str = "proposal";

    fn identity(&self) -> &Identity {
        &self.progress.identity
    }
}

impl Extensible for Proposal {
    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }
}

/// Builder for [`Proposal`].
#[derive(Debug, Default)]
pub struct ProposalBuilder {
    proposal: Proposal,
}

impl ProposalBuilder {
    /// Set a caller-chosen primary key.
    #[must_use]
    pub fn pk(mut self, pk: impl Into<String>) -> Self {
        self.proposal.progress.identity.pk = pk.into();
        self
    }

    /// Set the proposal content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.proposal.progress.content = content.into();
        self
    }

    /// Set the answer to template question 1.
    #[must_use]
    pub fn q1(mut self, q1: impl Into<String>) -> Self {
        self.proposal.q1 = Some(q1.into());
        self
    }

    /// Set the answer to template question 2.
    #[must_use]
    pub fn q2(mut self, q2: impl Into<String>) -> Self {
        self.proposal.q2 = Some(q2.into());
        self
    }

    /// Set the answer to template question 3.
    #[must_use]
    pub fn q3(mut self, q3: impl Into<String>) -> Self {
        self.proposal.q3 = Some(q3.into());
        self
    }

    /// Set the answer to template question 4.
    #[must_use]
    pub fn q4(mut self, q4: impl Into<String>) -> Self {
        self.proposal.q4 = Some(q4.into());
        self
    }

    /// Set the answer to template question 5.
    #[must_use]
    pub fn q5(mut self, q5: impl Into<String>) -> Self {
        self.proposal.q5 = Some(q5.into());
        self
    }

    /// Set the keys of cited papers.
    #[must_use]
    pub fn citations(mut self, citations: Vec<String>) -> Self {
        self.proposal.citations = citations;
        self
    }

    /// Set the abstract.
    #[must_use]
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.proposal.abstract_text = abstract_text.into();
        self
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.proposal.title = Some(title.into());
        self
    }

    /// Set the target conference.
    #[must_use]
    pub fn conference(mut self, conference: impl Into<String>) -> Self {
        self.proposal.conference = Some(conference.into());
        self
    }

    /// Build the [`Proposal`].
    #[must_use]
    pub fn build(self) -> Proposal {
        self.proposal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_proposal_defaults() {
        let proposal = Proposal::new();
        assert!(proposal.q1.is_none());
        assert!(proposal.q5.is_none());
        assert!(proposal.citations.is_empty());
        assert!(proposal.abstract_text.is_empty());
        assert!(proposal.title.is_none());
        assert!(proposal.conference.is_none());
    }

    #[test]
    fn test_proposal_incremental_template_fill() {
        let mut proposal = Proposal::builder()
            .title("Simulated Peer Review")
            .abstract_text("We simulate the full review cycle.")
            .build();
        // Answers arrive one at a time as the writing agent works.
        proposal.q1 = Some("How do agent reviews differ from human ones?".to_string());
        proposal.q2 = Some("Review quality gates all downstream science.".to_string());
        assert!(proposal.q1.is_some());
        assert!(proposal.q3.is_none());
    }

    #[test]
    fn test_proposal_abstract_wire_key() {
        let proposal = Proposal::builder().abstract_text("We propose...").build();
        let value = codec::to_value(&proposal).unwrap();
        assert_eq!(value["abstract"], "We propose...");
        assert!(value.get("abstract_text").is_none());
    }

    #[test]
    fn test_proposal_roundtrip_with_citations() {
        let proposal = Proposal::builder()
            .pk("proposal-1")
            .citations(vec!["paper-1".to_string(), "paper-2".to_string()])
            .conference("ICLR".to_string())
            .build();
        let json = codec::to_json(&proposal).unwrap();
        let back: Proposal = codec::from_json(&json).unwrap();
        assert_eq!(proposal, back);
    }
}
