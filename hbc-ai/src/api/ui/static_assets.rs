//! Static asset handlers for hbc-ai UI
//!
//! Embeds and serves CSS/JS files at compile time

use axum::{http::StatusCode, response::{IntoResponse, Response}};

const HBC_UI_CSS: &str = include_str!("../../../static/hbc-ui.css");
const CLASSIFY_JS: &str = include_str!("../../../static/classify.js");

/// GET /static/hbc-ui.css
pub async fn serve_hbc_ui_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        HBC_UI_CSS,
    )
        .into_response()
}

/// GET /static/classify.js
pub async fn serve_classify_js() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "application/javascript"),
            ("cache-control", "no-cache, no-store, must-revalidate"),
        ],
        CLASSIFY_JS,
    )
        .into_response()
}
