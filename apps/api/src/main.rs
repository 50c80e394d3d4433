mod config;
mod errors;
mod listing;
mod models;
mod routes;
mod sessions;
mod source;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::sessions::SessionStore;
use crate::source::{DemoRecordSource, HttpRecordSource, RecordSource};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    let source = build_record_source(&config)?;
    info!("Record source: {}", source.name());

    let sessions = SessionStore::new(config.max_sessions);
    info!("Session store initialized (max {} sessions)", config.max_sessions);

    let state = AppState {
        config: config.clone(),
        source,
        sessions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// HTTP source when JOBS_API_URL is configured, the demo list otherwise.
fn build_record_source(config: &Config) -> Result<Arc<dyn RecordSource>> {
    match &config.jobs_api_url {
        Some(url) => {
            info!("Fetching jobs from {url}");
            let source =
                HttpRecordSource::new(url.clone(), Duration::from_secs(config.fetch_timeout_secs))?;
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(DemoRecordSource)),
    }
}
