//! hbc-ai library interface
//!
//! Heartbeat sound classification service: takes an uploaded recording
//! (or a bundled sample), runs it through an injected audio classifier and
//! reports aggregated normal / artifact / murmur scores.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use hbc_common::config::DEFAULT_MAX_UPLOAD_BYTES;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::services::{AudioClassifier, ClassificationService, SampleLibrary};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Classifier + aggregator
    pub classification: ClassificationService,
    /// Bundled sample recordings
    pub samples: Arc<SampleLibrary>,
    /// Upload size cap in bytes
    pub max_upload_bytes: usize,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last classification error for diagnostics
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn AudioClassifier>, samples: SampleLibrary) -> Self {
        Self {
            classification: ClassificationService::new(classifier),
            samples: Arc::new(samples),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // UI routes (HTML page + assets)
        .merge(api::ui_routes())
        // API routes
        .merge(api::classify_routes(state.max_upload_bytes))
        .merge(api::sample_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
