//! Pipeline tests against in-memory collaborator doubles.

use super::*;
use crate::wizard::{Proficiency, WizardData};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default, Clone)]
struct MemoryStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

#[async_trait::async_trait]
impl ContentStore for MemoryStore {
    async fn read(&self, key: &LessonKey) -> anyhow::Result<Option<String>> {
        Ok(self.blobs.lock().await.get(&key.to_string()).cloned())
    }

    async fn write(&self, key: &LessonKey, blob: &str) -> anyhow::Result<()> {
        self.blobs
            .lock()
            .await
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[derive(Clone)]
struct StubGenerator {
    calls: Arc<AtomicUsize>,
    reply: String,
    delay: Option<Duration>,
    fail: bool,
}

impl StubGenerator {
    fn replying(reply: &str) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            reply: reply.to_string(),
            delay: None,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::replying("")
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Generator for StubGenerator {
    async fn generate(&self, _request: &LessonRequest) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("model unavailable");
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.reply.clone())
    }
}

fn algebra_request() -> LessonRequest {
    LessonRequest {
        user: "u-17".to_string(),
        subject: "math".to_string(),
        topic: "algebra".to_string(),
        wizard: Some(WizardData::with_proficiency(Proficiency::Advanced)),
    }
}

#[tokio::test]
async fn miss_generates_then_hit_serves_cached() {
    let generator = StubGenerator::replying("Lesson on Algebra");
    let pipeline = LessonPipeline::new(generator.clone(), MemoryStore::default(), "v3".into());

    let request = algebra_request();
    assert_eq!(pipeline.fetch(&request).await.unwrap(), "Lesson on Algebra");
    assert_eq!(pipeline.fetch(&request).await.unwrap(), "Lesson on Algebra");
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn version_bump_regenerates() {
    let store = MemoryStore::default();
    let request = algebra_request();

    let old = StubGenerator::replying("old lesson");
    LessonPipeline::new(old, store.clone(), "v3".into())
        .fetch(&request)
        .await
        .unwrap();

    let new = StubGenerator::replying("new lesson");
    let pipeline = LessonPipeline::new(new.clone(), store, "v4".into());
    assert_eq!(pipeline.fetch(&request).await.unwrap(), "new lesson");
    assert_eq!(new.call_count(), 1);
}

#[tokio::test]
async fn wizard_change_regenerates_under_its_own_key() {
    let store = MemoryStore::default();
    let generator = StubGenerator::replying("lesson");
    let pipeline = LessonPipeline::new(generator.clone(), store, "v3".into());

    let advanced = algebra_request();
    let beginner = LessonRequest {
        wizard: Some(WizardData::with_proficiency(Proficiency::Beginner)),
        ..advanced.clone()
    };

    pipeline.fetch(&advanced).await.unwrap();
    pipeline.fetch(&beginner).await.unwrap();
    assert_eq!(generator.call_count(), 2);

    // Both personalizations stay cached side by side.
    pipeline.fetch(&advanced).await.unwrap();
    pipeline.fetch(&beginner).await.unwrap();
    assert_eq!(generator.call_count(), 2);
}

#[tokio::test]
async fn generation_failure_serves_stale_copy() {
    let store = MemoryStore::default();
    let request = algebra_request();

    LessonPipeline::new(StubGenerator::replying("old lesson"), store.clone(), "v3".into())
        .fetch(&request)
        .await
        .unwrap();

    // Prompt version moved on but the model is down.
    let pipeline = LessonPipeline::new(StubGenerator::failing(), store, "v4".into());
    assert_eq!(pipeline.fetch(&request).await.unwrap(), "old lesson");
}

#[tokio::test]
async fn generation_failure_without_cache_propagates() {
    let pipeline =
        LessonPipeline::new(StubGenerator::failing(), MemoryStore::default(), "v3".into());
    assert!(pipeline.fetch(&algebra_request()).await.is_err());
}

#[tokio::test]
async fn pipeline_builds_from_registry() {
    let registry = crate::version::VersionRegistry::from_toml("[versions]\nlesson = \"v9\"\n").unwrap();
    let generator = StubGenerator::replying("lesson");
    let pipeline =
        LessonPipeline::from_registry(generator, MemoryStore::default(), &registry, "lesson")
            .unwrap();

    let request = algebra_request();
    pipeline.fetch(&request).await.unwrap();

    // The stored blob carries the registry's version.
    let blob = pipeline.store.read(&request.key()).await.unwrap().unwrap();
    let envelope = crate::envelope::parse(&blob);
    assert_eq!(envelope.version, Some("v9".into()));
}

#[tokio::test]
async fn concurrent_fetches_generate_once() {
    let mut generator = StubGenerator::replying("Lesson on Algebra");
    generator.delay = Some(Duration::from_millis(50));

    let pipeline = LessonPipeline::new(generator.clone(), MemoryStore::default(), "v3".into());
    let request = algebra_request();

    let (a, b) = tokio::join!(pipeline.fetch(&request), pipeline.fetch(&request));
    assert_eq!(a.unwrap(), "Lesson on Algebra");
    assert_eq!(b.unwrap(), "Lesson on Algebra");
    assert_eq!(generator.call_count(), 1);
}
