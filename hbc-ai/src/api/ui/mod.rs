//! UI Routes - HTML page and embedded assets for the hbc-ai web interface
//!
//! # Structure
//! - **Static Assets** (`static_assets`): CSS/JS file serving
//! - **Root Page** (`root`): upload, playback, results and samples
//! - **Themes** (`theme`): the two colour themes

use axum::{routing::get, Router};
use crate::AppState;

mod root;
mod static_assets;
pub mod theme;

use root::root_page;
use static_assets::{serve_classify_js, serve_hbc_ui_css};

pub use theme::Theme;

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_page))
        .route("/static/hbc-ui.css", get(serve_hbc_ui_css))
        .route("/static/classify.js", get(serve_classify_js))
}
