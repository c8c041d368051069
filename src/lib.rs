//! # ScholarSim: Entity Schema for Simulated Research Communities
//!
//! ScholarSim is the canonical data model for a simulated multi-agent
//! academic research pipeline: researcher [`profiles`](profile), literature
//! [`papers`](paper), the chain of work artifacts agents produce during a
//! research-and-peer-review cycle ([`progress`]), and the activity [`log`]
//! recording which profile produced which artifact at which simulated
//! timestep.
//!
//! The crate defines shapes, identity, defaults, and the serialization
//! boundary - nothing else. Agent policy, scheduling, persistence, and
//! embedding/LLM computation live elsewhere and only hand values in.
//!
//! ## Example
//!
//! ```rust
//! use scholarsim::codec;
//! use scholarsim::log::ProposalWritingLog;
//! use scholarsim::profile::Profile;
//! use scholarsim::progress::Proposal;
//!
//! let author = Profile::builder("Ada Lovelace", "Works on analytical engines.")
//!     .domain(vec!["computing".to_string()])
//!     .build();
//!
//! let proposal = Proposal::builder()
//!     .title("Programs as Engines of Thought")
//!     .abstract_text("We propose...")
//!     .build();
//!
//! let entry = ProposalWritingLog::new(&author.identity.pk, &proposal.progress.identity.pk)
//!     .at_timestep(1);
//!
//! // Every record serializes to a flat document and back.
//! let json = codec::to_json(&proposal)?;
//! let restored: Proposal = codec::from_json(&json)?;
//! assert_eq!(proposal, restored);
//! # assert_eq!(entry.log.timestep, 1);
//! # Ok::<(), scholarsim::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod codec;
pub mod error;
pub mod identity;
pub mod log;
pub mod paper;
pub mod profile;
pub mod progress;
pub mod prompt;

pub use codec::Record;
pub use error::{Error, Result};
pub use identity::{fresh_pk, Identity};
