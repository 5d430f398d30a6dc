//! Bundled sample endpoints
//!
//! GET /api/samples, POST /api/samples/:name/classify, GET /samples/:name

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::classify::{run_classification, ClassifyResponse, ClassifySource};
use crate::error::ApiResult;
use crate::services::SampleEntry;
use crate::AppState;

/// GET /api/samples response
#[derive(Debug, Serialize)]
pub struct SamplesResponse {
    pub samples: Vec<SampleEntry>,
}

/// GET /api/samples
pub async fn list_samples(State(state): State<AppState>) -> Json<SamplesResponse> {
    Json(SamplesResponse {
        samples: state.samples.list(),
    })
}

/// POST /api/samples/:name/classify
pub async fn classify_sample(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ClassifyResponse>> {
    let clip = state.samples.load(&name).await?;
    run_classification(&state, clip, ClassifySource::Sample).await
}

/// GET /samples/:name
///
/// Raw sample bytes for the page's audio player
pub async fn sample_audio(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Response> {
    let clip = state.samples.load(&name).await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, clip.content_type())],
        clip.shared_bytes(),
    )
        .into_response())
}

/// Build sample routes
pub fn sample_routes() -> Router<AppState> {
    Router::new()
        .route("/api/samples", get(list_samples))
        .route("/api/samples/:name/classify", post(classify_sample))
        .route("/samples/:name", get(sample_audio))
}
