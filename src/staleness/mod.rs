//! The freshness decision: may a cached blob be served for this request?

use crate::envelope::parse;
use crate::signature::build_signature;
use crate::version::PromptVersion;
use crate::wizard::WizardData;


/// Outcome of a freshness check. The body is surfaced whether or not it
/// is fresh, so a caller can show stale content while a refresh runs, or
/// simply discard it.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub is_fresh: bool,
    pub content: String,
}

/// Decide whether a stored blob is still usable for the current request.
///
/// Fresh means: the blob carries a header, its version equals the
/// current one, and its signature equals the signature derived from the
/// current wizard data. Legacy blobs (no header) can never be fresh,
/// since an absent version matches nothing. Two sides that both lack wizard
/// data agree on the `"no-wizard"` sentinel and count as a signature
/// match; one-sided wizard data never matches.
pub fn evaluate(
    raw: &str,
    current_version: &PromptVersion,
    current_wizard: Option<&WizardData>,
) -> Verdict {
    let envelope = parse(raw);
    let current_signature = build_signature(current_wizard);

    let is_fresh = envelope.version.as_ref() == Some(current_version)
        && envelope.signature.as_deref() == Some(current_signature.as_str());

    Verdict {
        is_fresh,
        content: envelope.body,
    }
}
