//! Learner personalization vocabulary produced by the study-plan wizard.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Grade {
    Elementary,
    MiddleSchool,
    HighSchool,
    College,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    ReadingWriting,
    Kinesthetic,
    Blended,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Personalization record attached to a lesson request. Every field is
/// optional; a wizard run that skipped a step simply leaves it unset.
/// `None` at the call site (no wizard run at all) is a distinct state
/// from `WizardData::default()` (wizard run, nothing answered).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardData {
    pub target_grade: Option<Grade>,
    pub proficiency_level: Option<Proficiency>,
    pub learning_style: Option<LearningStyle>,
    #[serde(default)]
    pub topic_confidence: BTreeMap<String, Confidence>,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Elementary => "elementary",
            Grade::MiddleSchool => "middle-school",
            Grade::HighSchool => "high-school",
            Grade::College => "college",
        }
    }
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }
}

impl LearningStyle {
    pub fn label(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::ReadingWriting => "reading-writing",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Blended => "blended",
        }
    }
}

impl WizardData {
    /// Convenience constructor for the common single-field case.
    pub fn with_proficiency(proficiency: Proficiency) -> Self {
        Self {
            proficiency_level: Some(proficiency),
            ..Self::default()
        }
    }
}
