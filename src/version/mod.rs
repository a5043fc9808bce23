//! Prompt version tokens and the registry file they are bumped in.

mod registry;


pub use registry::{RegistryError, VersionRegistry};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token identifying the generation prompt/template revision that
/// produced a piece of content. Only equality matters; nothing inspects
/// the token's internal structure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PromptVersion(String);

impl PromptVersion {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromptVersion {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for PromptVersion {
    fn from(token: String) -> Self {
        Self(token)
    }
}
