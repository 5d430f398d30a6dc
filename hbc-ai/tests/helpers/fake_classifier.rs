//! Classifier test doubles

use async_trait::async_trait;
use hbc_ai::models::Prediction;
use hbc_ai::services::{AudioClassifier, AudioClip, ClassifierError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns fixed predictions and records the clips it saw
pub struct FakeClassifier {
    predictions: Vec<Prediction>,
    seen: Mutex<Vec<String>>,
}

impl FakeClassifier {
    pub fn new(predictions: Vec<Prediction>) -> Self {
        Self {
            predictions,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// File names classified so far, in call order
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioClassifier for FakeClassifier {
    fn model_id(&self) -> &str {
        "test/fake-heartbeat"
    }

    async fn classify(&self, clip: &AudioClip) -> Result<Vec<Prediction>, ClassifierError> {
        self.seen.lock().unwrap().push(clip.file_name().to_string());
        Ok(self.predictions.clone())
    }
}

/// Always fails with the error produced by `make_error`
pub struct FailingClassifier {
    make_error: fn() -> ClassifierError,
}

impl FailingClassifier {
    pub fn new(make_error: fn() -> ClassifierError) -> Self {
        Self { make_error }
    }
}

#[async_trait]
impl AudioClassifier for FailingClassifier {
    fn model_id(&self) -> &str {
        "test/failing"
    }

    async fn classify(&self, _clip: &AudioClip) -> Result<Vec<Prediction>, ClassifierError> {
        Err((self.make_error)())
    }
}

/// Fails the first `failures` calls with a loading model, then succeeds
pub struct WarmingClassifier {
    failures: usize,
    calls: AtomicUsize,
    predictions: Vec<Prediction>,
}

impl WarmingClassifier {
    pub fn new(failures: usize, predictions: Vec<Prediction>) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
            predictions,
        }
    }
}

#[async_trait]
impl AudioClassifier for WarmingClassifier {
    fn model_id(&self) -> &str {
        "test/warming"
    }

    async fn classify(&self, _clip: &AudioClip) -> Result<Vec<Prediction>, ClassifierError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
            return Err(ClassifierError::ModelLoading {
                estimated_seconds: Some(1.0),
            });
        }
        Ok(self.predictions.clone())
    }
}
