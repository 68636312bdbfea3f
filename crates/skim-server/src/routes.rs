use crate::error::{media_failure, ApiError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use skim_core::SkimError;
use uuid::Uuid;

pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn summarize_routes() -> Router<AppState> {
    Router::new().route("/summarize", post(summarize))
}

pub fn media_routes() -> Router<AppState> {
    Router::new()
        .route("/trim-audio", post(trim_audio))
        .route("/resize-image", post(resize_image))
}

// ========== Summarization ==========

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub summary_ratio: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::bad_request("text content cannot be empty"));
    }
    let ratio = req
        .summary_ratio
        .unwrap_or(state.config.summarizer.default_ratio);
    let result = state.summarizer.summarize(&req.text, ratio)?;
    Ok(Json(SummarizeResponse {
        summary: result.text,
    }))
}

// ========== Media ==========

async fn trim_audio(State(state): State<AppState>, multipart: Multipart) -> Response {
    match handle_trim_audio(&state, multipart).await {
        Ok(file_path) => Json(json!({ "success": true, "file_path": file_path })).into_response(),
        Err(err) => media_failure(err),
    }
}

async fn handle_trim_audio(state: &AppState, mut multipart: Multipart) -> Result<String, SkimError> {
    let mut audio: Option<(String, Vec<u8>)> = None;
    let mut start = 0.0f64;
    let mut end = 0.0f64;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SkimError::Media(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio_file" => {
                let file_name = field.file_name().unwrap_or("audio.wav").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| SkimError::Media(e.to_string()))?;
                audio = Some((file_name, data.to_vec()));
            }
            "start" => start = parse_field(field, "start").await?,
            "end" => end = parse_field(field, "end").await?,
            _ => {}
        }
    }

    let (file_name, data) =
        audio.ok_or_else(|| SkimError::Media("missing audio_file field".into()))?;
    let trimmed = skim_media::trim_wav(&data, start, end)?;

    let out_name = format!("trimmed_{}_{}", Uuid::new_v4().simple(), sanitize(&file_name));
    tokio::fs::write(state.media_dir.join(&out_name), trimmed).await?;
    tracing::info!(file = %out_name, "trimmed audio upload");
    Ok(format!("static/{out_name}"))
}

async fn resize_image(State(state): State<AppState>, multipart: Multipart) -> Response {
    match handle_resize_image(&state, multipart).await {
        Ok((original, resized)) => Json(json!({
            "success": true,
            "original_file_path": original,
            "resized_file_path": resized,
        }))
        .into_response(),
        Err(err) => media_failure(err),
    }
}

async fn handle_resize_image(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<(String, String), SkimError> {
    let mut image: Option<(String, Vec<u8>)> = None;
    let mut width = 0u32;
    let mut height = 0u32;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SkimError::Media(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image_file" => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| SkimError::Media(e.to_string()))?;
                image = Some((file_name, data.to_vec()));
            }
            "width" => width = parse_field(field, "width").await?,
            "height" => height = parse_field(field, "height").await?,
            _ => {}
        }
    }

    let (file_name, data) =
        image.ok_or_else(|| SkimError::Media("missing image_file field".into()))?;
    let resized = skim_media::resize(&data, width, height)?;

    let id = Uuid::new_v4().simple();
    let base = sanitize(&file_name);
    let original_name = format!("original_{id}_{base}");
    let resized_name = format!("resized_{id}_{base}.{}", resized.extension);
    tokio::fs::write(state.media_dir.join(&original_name), &data).await?;
    tokio::fs::write(state.media_dir.join(&resized_name), &resized.data).await?;
    tracing::info!(file = %resized_name, width, height, "resized image upload");
    Ok((
        format!("static/{original_name}"),
        format!("static/{resized_name}"),
    ))
}

/// Parse a text multipart field into a number.
async fn parse_field<T: std::str::FromStr>(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<T, SkimError> {
    field
        .text()
        .await
        .map_err(|e| SkimError::Media(e.to_string()))?
        .trim()
        .parse()
        .map_err(|_| SkimError::Media(format!("invalid {name} value")))
}

/// Keep only the base file name, with a conservative character set.
fn sanitize(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    if cleaned.is_empty() {
        "upload".into()
    } else {
        cleaned
    }
}

// ========== Health & index ==========

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "language": state.summarizer.vocabulary().language(),
    }))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Skim</title>
<style>
body { font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 20px; background-color: #f4f4f4; }
textarea, input[type="number"] { width: 100%; }
button { margin-top: 10px; }
.panel { margin-top: 20px; padding: 10px; background: #fff; border: 1px solid #ddd; }
</style>
</head>
<body>
<h1>Skim</h1>

<h2>Text Summarizer</h2>
<form id="summarize-form">
<textarea id="text" placeholder="Enter text to summarize..."></textarea>
<input type="number" id="summary_ratio" step="0.1" min="0" max="1" value="0.3" required>
<button type="submit">Summarize</button>
</form>
<div class="panel" id="summary"></div>

<h2>Audio Trimming</h2>
<form id="trim-form" enctype="multipart/form-data">
<input type="file" name="audio_file" accept=".wav" required>
<label>Start (s):</label><input type="number" name="start" value="0" step="0.1" required>
<label>End (s):</label><input type="number" name="end" value="0" step="0.1" required>
<button type="submit">Trim Audio</button>
</form>
<div class="panel" id="audio-player"></div>

<h2>Image Resizing</h2>
<form id="resize-form" enctype="multipart/form-data">
<input type="file" name="image_file" accept="image/*" required>
<label>Width (px):</label><input type="number" name="width" required>
<label>Height (px):</label><input type="number" name="height" required>
<button type="submit">Resize Image</button>
</form>
<div class="panel" id="image-display"></div>

<script>
document.getElementById('summarize-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const text = document.getElementById('text').value;
  const ratio = parseFloat(document.getElementById('summary_ratio').value);
  const response = await fetch('/summarize', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ text, summary_ratio: ratio })
  });
  const result = await response.json();
  document.getElementById('summary').innerText =
    response.ok ? result.summary : result.error.message;
});

document.getElementById('trim-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const response = await fetch('/trim-audio', { method: 'POST', body: new FormData(event.target) });
  const result = await response.json();
  document.getElementById('audio-player').innerHTML = result.success
    ? `<audio controls><source src="${result.file_path}" type="audio/wav"></audio>`
    : result.message;
});

document.getElementById('resize-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const response = await fetch('/resize-image', { method: 'POST', body: new FormData(event.target) });
  const result = await response.json();
  document.getElementById('image-display').innerHTML = result.success
    ? `<img src="${result.original_file_path}" style="max-width:100%"><img src="${result.resized_file_path}" style="max-width:100%">`
    : result.message;
});
</script>
</body>
</html>
"#;
