//! # Mnemosyne
//!
//! Lesson cache staleness engine for an AI tutoring backend.
//!
//! A generated lesson is cached as one opaque text blob. Whether that
//! blob may be reused for a new request depends on two independent axes:
//! the prompt version it was generated under, and the learner's wizard
//! personalization. Both facts ride inside the blob as a delimited
//! header, and the decision logic here is pure: no I/O, no state.
//!
//! ```text
//! request → staleness::evaluate → fresh? serve body
//!               │                 stale? regenerate, envelope::serialize, store
//!          envelope::parse
//!          signature::build_signature
//! ```
//!
//! The `pipeline` module wraps the core with the calling discipline:
//! per-key single-flight regeneration and stale fallback, with the AI
//! client and the store behind traits.

pub mod envelope;
pub mod pipeline;
pub mod signature;
pub mod staleness;
pub mod version;
pub mod wizard;

pub use envelope::{parse, serialize, Envelope, META_DELIM};
pub use signature::{build_signature, NO_WIZARD};
pub use staleness::{evaluate, Verdict};
pub use version::{PromptVersion, RegistryError, VersionRegistry};
pub use wizard::{Confidence, Grade, LearningStyle, Proficiency, WizardData};
