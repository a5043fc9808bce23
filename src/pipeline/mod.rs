//! Regeneration pipeline: read → evaluate → regenerate on stale.
//!
//! This is the calling side of the staleness core. The AI generation
//! call and the persistence layer stay behind traits; the pipeline owns
//! the discipline around them: per-key single-flight so at most one
//! regeneration runs per lesson key, and stale fallback so a model
//! outage degrades to yesterday's lesson instead of an error page.

mod singleflight;
mod traits;

#[cfg(test)]
mod tests;

pub use singleflight::FlightMap;
pub use traits::{ContentStore, Generator};

use crate::envelope::serialize;
use crate::signature::build_signature;
use crate::staleness::evaluate;
use crate::version::{PromptVersion, RegistryError, VersionRegistry};
use crate::wizard::WizardData;
use std::fmt;
use tracing::{debug, warn};

/// Logical cache key: one stored blob, and at most one regeneration in
/// flight, per (user, subject, topic, wizard signature).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LessonKey {
    pub user: String,
    pub subject: String,
    pub topic: String,
    pub wizard_signature: String,
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.user, self.subject, self.topic, self.wizard_signature
        )
    }
}

/// A request for one lesson, as it arrives from the webapp.
#[derive(Debug, Clone)]
pub struct LessonRequest {
    pub user: String,
    pub subject: String,
    pub topic: String,
    pub wizard: Option<WizardData>,
}

impl LessonRequest {
    pub fn key(&self) -> LessonKey {
        LessonKey {
            user: self.user.clone(),
            subject: self.subject.clone(),
            topic: self.topic.clone(),
            wizard_signature: build_signature(self.wizard.as_ref()),
        }
    }
}

/// Coordinator: store + generator + the current prompt version.
pub struct LessonPipeline<G, S> {
    generator: G,
    store: S,
    version: PromptVersion,
    flights: FlightMap,
}

impl<G: Generator, S: ContentStore> LessonPipeline<G, S> {
    pub fn new(generator: G, store: S, version: PromptVersion) -> Self {
        Self {
            generator,
            store,
            version,
            flights: FlightMap::default(),
        }
    }

    /// Construct with the current version for `kind` taken from the
    /// content team's registry file.
    pub fn from_registry(
        generator: G,
        store: S,
        registry: &VersionRegistry,
        kind: &str,
    ) -> Result<Self, RegistryError> {
        let version = registry.current(kind)?.clone();
        Ok(Self::new(generator, store, version))
    }

    /// Serve a lesson, regenerating it first if the cached copy no
    /// longer matches the current prompt version and wizard signature.
    pub async fn fetch(&self, request: &LessonRequest) -> anyhow::Result<String> {
        let key = request.key();
        let cached = self.store.read(&key).await?;

        if let Some(blob) = &cached {
            let verdict = evaluate(blob, &self.version, request.wizard.as_ref());
            if verdict.is_fresh {
                debug!(key = %key, "serving cached lesson");
                return Ok(verdict.content);
            }
            debug!(key = %key, "cached lesson is stale");
        }

        self.refresh(&key, request, cached).await
    }

    async fn refresh(
        &self,
        key: &LessonKey,
        request: &LessonRequest,
        cached: Option<String>,
    ) -> anyhow::Result<String> {
        let _flight = self.flights.acquire(&key.to_string()).await;

        // Another flight may have refreshed this key while we waited.
        if let Some(blob) = self.store.read(key).await? {
            let verdict = evaluate(&blob, &self.version, request.wizard.as_ref());
            if verdict.is_fresh {
                debug!(key = %key, "refreshed by a concurrent flight");
                return Ok(verdict.content);
            }
        }

        match self.generator.generate(request).await {
            Ok(body) => {
                let blob = serialize(&body, &self.version, request.wizard.as_ref());
                self.store.write(key, &blob).await?;
                debug!(key = %key, "lesson regenerated");
                Ok(body)
            }
            Err(err) => match cached {
                Some(blob) => {
                    warn!(key = %key, error = %err, "regeneration failed, serving stale copy");
                    Ok(evaluate(&blob, &self.version, request.wizard.as_ref()).content)
                }
                None => Err(err),
            },
        }
    }
}
