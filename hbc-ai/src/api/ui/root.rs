//! Root page handler - Heartbeat Sound Classification

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use super::theme::Theme;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub theme: Option<String>,
}

/// GET /
///
/// Upload form, inline playback, results box and sample buttons,
/// coloured by the `theme` query parameter.
pub async fn root_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let theme = Theme::from_query(query.theme.as_deref());
    Html(render_root_page(&state, theme))
}

fn render_root_page(state: &AppState, theme: Theme) -> String {
    let theme_options: String = Theme::ALL
        .iter()
        .map(|t| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                t.slug(),
                if *t == theme { " selected" } else { "" },
                t.display_name()
            )
        })
        .collect();

    let sample_buttons: String = state
        .samples
        .list()
        .iter()
        .map(|entry| {
            format!(
                r#"<button class="button" data-sample="{name}"{disabled}>{name}</button>"#,
                name = entry.name,
                disabled = if entry.available { "" } else { " disabled title=\"Sample file not installed\"" }
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Heartbeat Sound Classification</title>
    <style>
{theme_css}
    </style>
    <link rel="stylesheet" href="/static/hbc-ui.css">
</head>
<body>
<div class="layout">
    <aside class="sidebar">
        <label for="theme-select">Select Theme</label>
        <select id="theme-select">{theme_options}</select>
    </aside>

    <main class="content">
        <h1>Heartbeat Sound Classification</h1>

        <div class="upload">
            <label for="audio-file">Upload an audio file</label><br>
            <input type="file" id="audio-file" accept=".wav,.mp3,audio/wav,audio/mpeg">
        </div>

        <section id="upload-section" class="hidden">
            <h2>Uploaded Audio File</h2>
            <audio id="upload-audio" controls></audio>
            <p id="upload-status" class="status"></p>
            <h2>Classification Results</h2>
            <div id="upload-results" class="results"></div>
        </section>

        <p>Sample Audio Files:</p>
        <div id="samples">{sample_buttons}</div>

        <section id="sample-section" class="hidden">
            <h2 id="sample-title"></h2>
            <audio id="sample-audio" controls></audio>
            <p>Results:</p>
            <div id="sample-results" class="results"></div>
        </section>

        <footer>
            Model: {model_id} | hbc-ai v{version} [{git_hash}] built {build_timestamp}
        </footer>
    </main>
</div>
<script src="/static/classify.js"></script>
</body>
</html>
"#,
        theme_css = theme.css_variables(),
        theme_options = theme_options,
        sample_buttons = sample_buttons,
        model_id = escape_html(state.classification.model_id()),
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("GIT_HASH"),
        build_timestamp = env!("BUILD_TIMESTAMP"),
    )
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
