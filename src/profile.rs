//! Profile - a simulated researcher
//!
//! A profile is the actor record of the simulation: who a researcher is,
//! what they have published, and which simulation roles they are eligible
//! for. Eligibility flags are independent of each other; a profile may
//! qualify for several roles at once.

use serde::{Deserialize, Serialize};

use crate::codec::Record;
use crate::identity::Identity;

const fn eligible() -> bool {
    true
}

/// A simulated researcher.
///
/// `name` and `bio` are required; everything else defaults. The `embed`
/// vector is supplied by an embedding provider and stored without
/// interpretation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Identity base.
    #[serde(flatten)]
    pub identity: Identity,
    /// Researcher name.
    pub name: String,
    /// Free-text biography.
    pub bio: String,
    /// Keys of collaborating profiles, in no particular order of strength.
    #[serde(default)]
    pub collaborators: Vec<String>,
    /// Titles of authored work, parallel to `pub_abstracts`.
    #[serde(default)]
    pub pub_titles: Vec<String>,
    /// Abstracts of authored work, parallel to `pub_titles`.
    #[serde(default)]
    pub pub_abstracts: Vec<String>,
    /// Topic tags.
    #[serde(default)]
    pub domain: Vec<String>,
    /// Affiliation, when known.
    #[serde(default)]
    pub institute: Option<String>,
    /// Opaque embedding vector, stored and forwarded without interpretation.
    #[serde(default)]
    pub embed: Option<Vec<f32>>,
    /// Eligible to lead a project.
    #[serde(default = "eligible")]
    pub is_leader_candidate: bool,
    /// Eligible to join a project as a member.
    #[serde(default = "eligible")]
    pub is_member_candidate: bool,
    /// Eligible to review proposals.
    #[serde(default = "eligible")]
    pub is_reviewer_candidate: bool,
    /// Eligible to chair a meta-review.
    #[serde(default = "eligible")]
    pub is_chair_candidate: bool,
}

impl Profile {
    /// Create a profile with the required fields; everything else takes
    /// its default (empty sequences, no affiliation, eligible for every
    /// role).
    #[must_use]
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        ProfileBuilder::new(name, bio).build()
    }

    /// Create a builder for constructing a profile with optional fields.
    #[must_use]
    pub fn builder(name: impl Into<String>, bio: impl Into<String>) -> ProfileBuilder {
        ProfileBuilder::new(name, bio)
    }
}

impl Record for Profile {
    const KIND: &'static str = "profile";

    fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Builder for [`Profile`].
#[derive(Debug)]
pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            profile: Profile {
                identity: Identity::new(),
                name: name.into(),
                bio: bio.into(),
                collaborators: Vec::new(),
                pub_titles: Vec::new(),
                pub_abstracts: Vec::new(),
                domain: Vec::new(),
                institute: None,
                embed: None,
                is_leader_candidate: true,
                is_member_candidate: true,
                is_reviewer_candidate: true,
                is_chair_candidate: true,
            },
        }
    }

    /// Set a caller-chosen primary key.
    #[must_use]
    pub fn pk(mut self, pk: impl Into<String>) -> Self {
        self.profile.identity.pk = pk.into();
        self
    }

    /// Set the project tag.
    #[must_use]
    pub fn project_name(mut self, project_name: impl Into<String>) -> Self {
        self.profile.identity.project_name = Some(project_name.into());
        self
    }

    /// Set the collaborating profile keys.
    #[must_use]
    pub fn collaborators(mut self, collaborators: Vec<String>) -> Self {
        self.profile.collaborators = collaborators;
        self
    }

    /// Set the titles of authored work.
    #[must_use]
    pub fn pub_titles(mut self, pub_titles: Vec<String>) -> Self {
        self.profile.pub_titles = pub_titles;
        self
    }

    /// Set the abstracts of authored work.
    #[must_use]
    pub fn pub_abstracts(mut self, pub_abstracts: Vec<String>) -> Self {
        self.profile.pub_abstracts = pub_abstracts;
        self
    }

    /// Set the topic tags.
    #[must_use]
    pub fn domain(mut self, domain: Vec<String>) -> Self {
        self.profile.domain = domain;
        self
    }

    /// Set the affiliation.
    #[must_use]
    pub fn institute(mut self, institute: impl Into<String>) -> Self {
        self.profile.institute = Some(institute.into());
        self
    }

    /// Set the opaque embedding vector.
    #[must_use]
    pub fn embed(mut self, embed: Vec<f32>) -> Self {
        self.profile.embed = Some(embed);
        self
    }

    /// Set leader eligibility.
    #[must_use]
    pub const fn leader_candidate(mut self, eligible: bool) -> Self {
        self.profile.is_leader_candidate = eligible;
        self
    }

    /// Set member eligibility.
    #[must_use]
    pub const fn member_candidate(mut self, eligible: bool) -> Self {
        self.profile.is_member_candidate = eligible;
        self
    }

    /// Set reviewer eligibility.
    #[must_use]
    pub const fn reviewer_candidate(mut self, eligible: bool) -> Self {
        self.profile.is_reviewer_candidate = eligible;
        self
    }

    /// Set chair eligibility.
    #[must_use]
    pub const fn chair_candidate(mut self, eligible: bool) -> Self {
        self.profile.is_chair_candidate = eligible;
        self
    }

    /// Build the [`Profile`].
    #[must_use]
    pub fn build(self) -> Profile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_profile_new_defaults() {
        let profile = Profile::new("Ada Lovelace", "Works on analytical engines.");
        assert!(!profile.identity.pk.is_empty());
        assert!(profile.collaborators.is_empty());
        assert!(profile.pub_titles.is_empty());
        assert!(profile.institute.is_none());
        assert!(profile.embed.is_none());
        assert!(profile.is_leader_candidate);
        assert!(profile.is_member_candidate);
        assert!(profile.is_reviewer_candidate);
        assert!(profile.is_chair_candidate);
    }

    #[test]
    fn test_profile_flags_are_independent() {
        let profile = Profile::builder("Ada", "bio")
            .reviewer_candidate(false)
            .build();
        assert!(!profile.is_reviewer_candidate);
        assert!(profile.is_leader_candidate);
        assert!(profile.is_member_candidate);
        assert!(profile.is_chair_candidate);
    }

    #[test]
    fn test_profile_builder_optional_fields() {
        let profile = Profile::builder("Grace Hopper", "Compilers.")
            .pk("profile-1")
            .institute("Navy")
            .domain(vec!["PL".to_string()])
            .embed(vec![0.25, -0.5])
            .build();
        assert_eq!(profile.identity.pk, "profile-1");
        assert_eq!(profile.institute.as_deref(), Some("Navy"));
        assert_eq!(profile.embed.as_deref(), Some(&[0.25, -0.5][..]));
    }

    #[test]
    fn test_profile_roundtrip_flat_document() {
        let profile = Profile::builder("Ada", "bio")
            .project_name("engines")
            .collaborators(vec!["pk-2".to_string()])
            .build();
        let value = codec::to_value(&profile).unwrap();
        // Identity is flattened: pk sits at the top level of the document.
        assert_eq!(value["pk"], profile.identity.pk.as_str());
        assert_eq!(value["project_name"], "engines");
        let back: Profile = codec::from_value(value).unwrap();
        assert_eq!(profile, back);
    }
}
