//! Work artifacts of the simulated research cycle
//!
//! Every artifact an agent produces during the cycle shares the same
//! progress shape and flows through the same stages:
//!
//! ```text
//! Insight ──> Idea ──> Proposal ──> Review ──> Rebuttal ──> MetaReview
//! ```
//!
//! All six subtypes embed [`Progress`] (free-text content, the prompt
//! exchange that produced it, evaluation scores) and carry an extension
//! map for undeclared fields, so experimental agent-output schemas pass
//! through without changes here.
//!
//! ## Usage
//!
//! ```rust
//! use scholarsim::progress::{Extensible, Idea, Proposal, Review};
//!
//! let mut idea = Idea::new();
//! idea.progress.content = "Study emergent collaboration.".to_string();
//!
//! let proposal = Proposal::builder()
//!     .title("Emergent Collaboration in Agent Communities")
//!     .abstract_text("We propose...")
//!     .build();
//!
//! let mut review = Review::builder().proposal_pk(&proposal.progress.identity.pk).build();
//! review.score = Some(8);
//! review.set_extra("confidence", serde_json::json!(4));
//! ```

mod assessment;
mod core;
mod idea;
mod insight;
mod metareview;
mod proposal;
mod rebuttal;
mod review;

pub use assessment::Assessment;
pub use self::core::Progress;
pub use idea::Idea;
pub use insight::Insight;
pub use metareview::{MetaReview, MetaReviewBuilder};
pub use proposal::{Proposal, ProposalBuilder};
pub use rebuttal::{Rebuttal, RebuttalBuilder};
pub use review::{Review, ReviewBuilder};

use serde_json::{Map, Value};

/// Work artifacts that accept fields beyond their declared schema.
///
/// Undeclared fields are unvalidated, kept opaquely, and reproduced
/// field-for-field on serialization. Declared fields never land in the
/// extension map; reconstruction consumes them first.
pub trait Extensible {
    /// Extension fields carried beyond the declared schema.
    fn extra(&self) -> &Map<String, Value>;

    /// Mutable access to the extension fields.
    fn extra_mut(&mut self) -> &mut Map<String, Value>;

    /// Set an extension field.
    fn set_extra(&mut self, key: impl Into<String>, value: Value) {
        self.extra_mut().insert(key.into(), value);
    }

    /// Read an extension field.
    fn get_extra(&self, key: &str) -> Option<&Value> {
        self.extra().get(key)
    }
}
