//! Storage envelope for cached lessons.
//!
//! The store gives us a single unstructured text column, so the prompt
//! version and wizard signature ride inside the blob itself: one
//! delimited JSON header line, then the body verbatim.
//!
//! ```text
//! %%LESSON-META%%{"v":"v3","w":"no-wizard"}%%LESSON-META%%
//! <body>
//! ```

mod parser;
mod serializer;


pub use parser::parse;
pub use serializer::serialize;

use crate::version::PromptVersion;
use serde::{Deserialize, Serialize};

/// Marker bracketing the metadata payload. Chosen so it does not occur
/// naturally in generated lesson text; a body that nevertheless starts
/// with it will be misread as a header (see `parse`).
pub const META_DELIM: &str = "%%LESSON-META%%";

/// A cached lesson, decomposed. The single-string wire form exists only
/// at the storage boundary; everything in-process works on this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Prompt version the body was generated under; `None` for legacy
    /// blobs written before metadata embedding existed.
    pub version: Option<PromptVersion>,
    /// Wizard signature the body was generated for; `None` for legacy.
    pub signature: Option<String>,
    pub body: String,
}

impl Envelope {
    pub(crate) fn legacy(raw: &str) -> Self {
        Self {
            version: None,
            signature: None,
            body: raw.to_string(),
        }
    }
}

/// Header payload between the delimiters. Extra fields are tolerated so
/// future metadata facts can be added without stranding old readers.
#[derive(Serialize, Deserialize)]
pub(crate) struct MetaHeader {
    pub v: String,
    pub w: String,
}
