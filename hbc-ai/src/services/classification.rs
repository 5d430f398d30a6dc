//! Classification service
//!
//! Runs the injected classifier once per clip and reduces its raw output
//! with the score aggregator.

use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::models::{AggregatedResult, Prediction};
use crate::services::classifier::{AudioClassifier, AudioClip, ClassifierError};
use crate::services::score_aggregator::aggregate_with_report;

/// Outcome of one classification call
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub model_id: String,
    /// Raw classifier output, in the order returned
    pub predictions: Vec<Prediction>,
    pub results: AggregatedResult,
    /// Predictions whose label mapped to no category
    pub dropped: usize,
    pub elapsed_ms: u64,
}

/// Classifier + aggregator
#[derive(Clone)]
pub struct ClassificationService {
    classifier: Arc<dyn AudioClassifier>,
}

impl ClassificationService {
    pub fn new(classifier: Arc<dyn AudioClassifier>) -> Self {
        Self { classifier }
    }

    pub fn model_id(&self) -> &str {
        self.classifier.model_id()
    }

    pub async fn classify_clip(&self, clip: &AudioClip) -> Result<Classification, ClassifierError> {
        let start = Instant::now();

        let predictions = self.classifier.classify(clip).await?;
        let (results, dropped) = aggregate_with_report(&predictions);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            model = %self.model_id(),
            file = %clip.file_name(),
            normal = results.normal,
            artifact = results.artifact,
            murmur = results.murmur,
            dropped,
            elapsed_ms,
            "Classified audio"
        );

        Ok(Classification {
            model_id: self.model_id().to_string(),
            predictions,
            results,
            dropped,
            elapsed_ms,
        })
    }

    pub async fn classify_path(&self, path: &Path) -> Result<Classification, ClassifierError> {
        let clip = AudioClip::from_path(path).await?;
        self.classify_clip(&clip).await
    }
}
