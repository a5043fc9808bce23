//! Canonical signature derivation for wizard personalization data.
//! The signature is compared byte-for-byte against the one stored in a
//! cached lesson, so it must come out identical for semantically-equal
//! inputs no matter how the caller assembled them.

use crate::wizard::{Confidence, Grade, LearningStyle, Proficiency, WizardData};
use serde::Serialize;
use std::collections::BTreeMap;


/// Sentinel signature for requests that carry no personalization at all.
pub const NO_WIZARD: &str = "no-wizard";

/// Normalized form of the wizard record. Field order is fixed by the
/// struct definition and the confidence map is a `BTreeMap`, so the
/// serialized output never depends on caller insertion order.
#[derive(Serialize)]
struct CanonicalForm<'a> {
    grade: &'static str,
    proficiency: &'static str,
    style: &'static str,
    confidence: &'a BTreeMap<String, Confidence>,
}

/// Derive the canonical signature for a personalization record.
///
/// Unset fields collapse to explicit defaults (grade and proficiency to
/// `"unknown"`, learning style to `"blended"`) so that "field skipped"
/// and "field answered with the default" hash the same way.
pub fn build_signature(wizard: Option<&WizardData>) -> String {
    let Some(data) = wizard else {
        return NO_WIZARD.to_string();
    };

    let canonical = CanonicalForm {
        grade: data.target_grade.as_ref().map_or("unknown", Grade::label),
        proficiency: data
            .proficiency_level
            .as_ref()
            .map_or("unknown", Proficiency::label),
        style: data
            .learning_style
            .as_ref()
            .map_or("blended", LearningStyle::label),
        confidence: &data.topic_confidence,
    };

    // String keys and unit-variant values only, so this cannot fail.
    serde_json::to_string(&canonical).expect("canonical form serializes")
}
