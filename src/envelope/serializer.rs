//! Envelope encoding: header line + body, body untouched.

use super::{MetaHeader, META_DELIM};
use crate::signature::build_signature;
use crate::version::PromptVersion;
use crate::wizard::WizardData;

/// Wrap a freshly generated body with its version and wizard signature.
///
/// The body is reproduced byte-for-byte by `parse` as long as it does not
/// itself begin with the metadata delimiter.
pub fn serialize(body: &str, version: &PromptVersion, wizard: Option<&WizardData>) -> String {
    let header = MetaHeader {
        v: version.to_string(),
        w: build_signature(wizard),
    };
    // Two string fields, cannot fail.
    let payload = serde_json::to_string(&header).expect("header serializes");

    format!("{}{}{}\n{}", META_DELIM, payload, META_DELIM, body)
}
