use anyhow::Context;
use tokio::net::TcpListener;

use tsviz::app;
use tsviz::config::Settings;
use tsviz::logging::{init_logging, LoggingConfig};
use tsviz::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())?;

    let settings = Settings::from_env().context("Invalid configuration")?;
    if let Some(seed) = settings.series_seed {
        tracing::info!("🎲 Using fixed series seed {}", seed);
    }

    let addr = settings.addr();
    let app = app::create_app(AppState::new(settings));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("🚀 Time series backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
