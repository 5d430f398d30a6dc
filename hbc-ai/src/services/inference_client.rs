//! Hosted inference client
//!
//! Default [`AudioClassifier`]: posts raw audio bytes to a Hugging
//! Face-compatible inference endpoint (`POST {endpoint}/models/{model_id}`)
//! and parses the `[{"label": .., "score": ..}]` response.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::models::Prediction;
use crate::services::classifier::{AudioClassifier, AudioClip, ClassifierError};

const USER_AGENT: &str = concat!("hbc-ai/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the inference endpoint
#[derive(Debug, Clone)]
pub struct InferenceSettings {
    /// Base URL, e.g. `https://api-inference.huggingface.co`
    pub endpoint: String,
    pub model_id: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

/// Success body. Batch-style responses wrap the list once more.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Flat(Vec<Prediction>),
    Nested(Vec<Vec<Prediction>>),
}

/// Error body, e.g. `{"error": "Model x is currently loading", "estimated_time": 20.0}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<serde_json::Value>,
    estimated_time: Option<f64>,
}

/// Inference API client bound to one model
pub struct HuggingFaceClassifier {
    http_client: reqwest::Client,
    model_url: String,
    model_id: String,
    api_token: Option<String>,
}

impl HuggingFaceClassifier {
    pub fn new(settings: InferenceSettings) -> Result<Self, ClassifierError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let model_url = format!(
            "{}/models/{}",
            settings.endpoint.trim_end_matches('/'),
            settings.model_id
        );

        Ok(Self {
            http_client,
            model_url,
            model_id: settings.model_id,
            api_token: settings.api_token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn model_url(&self) -> &str {
        &self.model_url
    }
}

#[async_trait]
impl AudioClassifier for HuggingFaceClassifier {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn classify(&self, clip: &AudioClip) -> Result<Vec<Prediction>, ClassifierError> {
        tracing::debug!(
            model = %self.model_id,
            file = %clip.file_name(),
            bytes = clip.len(),
            "Querying inference endpoint"
        );
        let start = Instant::now();

        let mut request = self
            .http_client
            .post(&self.model_url)
            .header(reqwest::header::CONTENT_TYPE, clip.content_type())
            .body(clip.shared_bytes());
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(map_error_status(status.as_u16(), &body));
        }

        let predictions = parse_predictions(&body)?;

        tracing::debug!(
            model = %self.model_id,
            predictions = predictions.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Inference response received"
        );

        Ok(predictions)
    }
}

fn map_error_status(status: u16, body: &str) -> ClassifierError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();

    match status {
        401 | 403 => ClassifierError::Unauthorized,
        503 => ClassifierError::ModelLoading {
            estimated_seconds: parsed.and_then(|b| b.estimated_time),
        },
        _ => {
            let message = parsed
                .and_then(|b| b.error)
                .map(|e| match e {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .unwrap_or_else(|| body.trim().to_string());
            ClassifierError::Api(status, message)
        }
    }
}

fn parse_predictions(body: &str) -> Result<Vec<Prediction>, ClassifierError> {
    let response: InferenceResponse =
        serde_json::from_str(body).map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

    let predictions = match response {
        InferenceResponse::Flat(predictions) => predictions,
        InferenceResponse::Nested(mut batches) => {
            if batches.is_empty() {
                Vec::new()
            } else {
                batches.swap_remove(0)
            }
        }
    };

    if let Some(bad) = predictions
        .iter()
        .find(|p| !p.score.is_finite() || !(0.0..=1.0).contains(&p.score))
    {
        return Err(ClassifierError::InvalidResponse(format!(
            "score {} for label '{}' outside [0, 1]",
            bad.score, bad.label
        )));
    }

    Ok(predictions)
}
