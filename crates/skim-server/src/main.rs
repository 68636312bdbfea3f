use skim_core::SkimConfig;
use skim_server::{app, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SkimConfig::from_file(path)?,
        None => SkimConfig::default(),
    };

    // Vocabulary and media-dir setup happen here; a failure aborts
    // startup instead of surfacing per request.
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config)?;

    tracing::info!(%addr, "skim server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
