//! rankwise web server
//!
//! Run with: cargo run -p rankwise-web
//! Set RANKWISE_CONFIG to load a dataset other than the built-in preset.

use tracing::info;
use tracing_subscriber::EnvFilter;

use rankwise_common::DatasetConfig;
use rankwise_web::{router::build_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rankwise=debug,info")),
        )
        .init();

    info!("Starting rankwise web server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = DatasetConfig::load()?;
    let addr = config.server.bind_addr();

    let state = AppState::new(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
