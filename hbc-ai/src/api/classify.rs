//! Classification API handlers
//!
//! POST /api/classify (multipart upload) and the shared classification
//! path used by the sample endpoints.

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{AggregatedResult, Prediction};
use crate::services::AudioClip;
use crate::utils::{probe_audio, AudioInfo};
use crate::AppState;

/// Multipart field carrying the audio file
pub const UPLOAD_FIELD: &str = "file";

/// Where the classified audio came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifySource {
    Upload,
    Sample,
}

/// Classification response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub request_id: Uuid,
    pub source: ClassifySource,
    pub file_name: String,
    pub model_id: String,
    pub results: AggregatedResult,
    /// Results box text, one `"<label>: <score:.2>"` line per category
    pub text: String,
    pub predictions: Vec<Prediction>,
    pub dropped: usize,
    pub audio: AudioInfo,
    pub elapsed_ms: u64,
}

/// POST /api/classify
///
/// Accepts `multipart/form-data` with a `file` field (.wav or .mp3).
/// The upload stays in memory for the lifetime of the request.
pub async fn classify_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ClassifyResponse>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("Upload is missing a file name".to_string()))?;
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let clip = AudioClip::new(file_name, bytes)?;
        return run_classification(&state, clip, ClassifySource::Upload).await;
    }

    Err(ApiError::BadRequest(format!(
        "Missing '{}' field in multipart body",
        UPLOAD_FIELD
    )))
}

/// Probe, classify and aggregate one clip
pub(crate) async fn run_classification(
    state: &AppState,
    clip: AudioClip,
    source: ClassifySource,
) -> ApiResult<Json<ClassifyResponse>> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("classify", %request_id, file = %clip.file_name());

    classify_clip(state, clip, source, request_id)
        .instrument(span)
        .await
        .map(Json)
}

async fn classify_clip(
    state: &AppState,
    clip: AudioClip,
    source: ClassifySource,
    request_id: Uuid,
) -> ApiResult<ClassifyResponse> {
    let bytes = clip.shared_bytes();
    let format = clip.format();
    let audio = tokio::task::spawn_blocking(move || probe_audio(bytes, format))
        .await
        .map_err(|e| ApiError::Internal(format!("Audio probe task failed: {}", e)))?
        .map_err(|e| ApiError::BadRequest(format!("Invalid audio file: {:#}", e)))?;

    let classification = match state.classification.classify_clip(&clip).await {
        Ok(classification) => {
            // Health reflects the latest outcome, not the worst one seen
            *state.last_error.write().await = None;
            classification
        }
        Err(e) => {
            tracing::warn!(error = %e, "Classification failed");
            *state.last_error.write().await = Some(e.to_string());
            return Err(e.into());
        }
    };

    Ok(ClassifyResponse {
        request_id,
        source,
        file_name: clip.file_name().to_string(),
        model_id: classification.model_id,
        text: classification.results.to_text(),
        results: classification.results,
        predictions: classification.predictions,
        dropped: classification.dropped,
        audio,
        elapsed_ms: classification.elapsed_ms,
    })
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(format!("Malformed multipart body: {}", err.body_text()))
    }
}

/// Build classification routes
pub fn classify_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/api/classify", post(classify_upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
