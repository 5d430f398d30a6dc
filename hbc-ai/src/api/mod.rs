//! HTTP API handlers for hbc-ai

pub mod classify;
pub mod health;
pub mod samples;
pub mod ui;

pub use classify::{classify_routes, ClassifyResponse, ClassifySource};
pub use health::health_routes;
pub use samples::sample_routes;
pub use ui::ui_routes;
