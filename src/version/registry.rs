//! Current prompt versions, one per content kind, loaded from TOML.
//!
//! The file is owned by the content team; bumping a version there is what
//! retires every cached lesson generated under the previous prompt.
//!
//! ```toml
//! [versions]
//! lesson = "v3"
//! quiz = "v1"
//! ```

use super::PromptVersion;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read version file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid version file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("No prompt version registered for content kind '{0}'")]
    UnknownKind(String),
}

#[derive(Deserialize, Debug, Clone)]
pub struct VersionRegistry {
    versions: BTreeMap<String, PromptVersion>,
}

impl VersionRegistry {
    pub fn from_toml(raw: &str) -> Result<Self, RegistryError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Current version for a content kind, e.g. "lesson".
    pub fn current(&self, kind: &str) -> Result<&PromptVersion, RegistryError> {
        self.versions
            .get(kind)
            .ok_or_else(|| RegistryError::UnknownKind(kind.to_string()))
    }
}
