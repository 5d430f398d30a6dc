//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status ("degraded" while the latest classification failed)
    pub status: String,
    /// Module name ("hbc-ai")
    pub module: String,
    /// Crate version from Cargo.toml
    pub version: String,
    /// Identifier of the model behind the classifier
    pub model_id: String,
    /// Seconds since service started
    pub uptime_seconds: u64,
    /// Error from the latest classification, cleared by the next success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.startup_time);
    let uptime_seconds = uptime.num_seconds().max(0) as u64;

    let last_error = state.last_error.read().await.clone();
    let status = if last_error.is_some() { "degraded" } else { "ok" };

    Json(HealthResponse {
        status: status.to_string(),
        module: "hbc-ai".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_id: state.classification.model_id().to_string(),
        uptime_seconds,
        last_error,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
