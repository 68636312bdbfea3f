//! Skim HTTP API server (Axum).
//!
//! Endpoints: text summarization, WAV trimming, image resizing, an
//! inline HTML form page, health, and static serving of processed media.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the application router for the given state.
pub fn app(state: AppState) -> Router {
    let media_dir = state.media_dir.clone();
    Router::new()
        .merge(routes::page_routes())
        .merge(routes::health_routes())
        .merge(routes::summarize_routes())
        .merge(routes::media_routes())
        .nest_service("/static", ServeDir::new(media_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
