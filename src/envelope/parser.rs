//! Tolerant envelope decoding.
//!
//! Two outcomes, decided purely by input shape: **structured** (header
//! decoded, stripped from the body) and **legacy** (no delimiter, or a
//! payload that does not decode). Legacy is a handled case, not a
//! failure; a parsing anomaly in stored metadata must never block
//! content delivery.

use super::{Envelope, MetaHeader, META_DELIM};
use crate::version::PromptVersion;

/// Decode a stored blob into version, signature, and body.
///
/// Total: every input yields a defined `Envelope`. Anything without a
/// well-formed header comes back as `(None, None, raw)`, pre-metadata
/// content that the evaluator will treat as stale.
pub fn parse(raw: &str) -> Envelope {
    let Some(rest) = raw.strip_prefix(META_DELIM) else {
        return Envelope::legacy(raw);
    };

    let Some(end) = rest.find(META_DELIM) else {
        // Opening delimiter never closed; keep the blob intact.
        return Envelope::legacy(raw);
    };

    let header: MetaHeader = match serde_json::from_str(&rest[..end]) {
        Ok(header) => header,
        Err(_) => return Envelope::legacy(raw),
    };

    // The serializer always writes one newline after the closing
    // delimiter; tolerate its absence in hand-edited blobs.
    let tail = &rest[end + META_DELIM.len()..];
    let body = tail.strip_prefix('\n').unwrap_or(tail);

    Envelope {
        version: Some(PromptVersion::from(header.v)),
        signature: Some(header.w),
        body: body.to_string(),
    }
}
