//! Seams to the external collaborators.

use super::{LessonKey, LessonRequest};

/// Produces a fresh lesson body. Implemented by the AI generation
/// client; retries and timeouts live behind this seam.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, request: &LessonRequest) -> anyhow::Result<String>;
}

/// Opaque blob persistence, one text value per lesson key. The store
/// never interprets the blob; the envelope layer does.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    async fn read(&self, key: &LessonKey) -> anyhow::Result<Option<String>>;
    async fn write(&self, key: &LessonKey, blob: &str) -> anyhow::Result<()>;
}
