use shabbat_server::config::ServerConfig;
use shabbat_server::domain::CityCatalog;
use shabbat_server::hebcal::HebcalClient;
use shabbat_server::web::{AppState, create_router};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "shabbat_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = CityCatalog::builtin();
    let hebcal = HebcalClient::new(config.hebcal.clone())?;

    let state = AppState::new(catalog, hebcal);
    let app = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        cities = catalog.len(),
        upstream = %config.hebcal.base_url,
        "Shabbat Times API listening"
    );
    tracing::info!("  GET  /                     - Status message");
    tracing::info!("  GET  /health               - Health check");
    tracing::info!("  GET  /test                 - Deployment smoke check");
    tracing::info!("  GET  /api/cities           - List cities");
    tracing::info!("  GET  /api/shabbat?city=..  - Shabbat times for a city");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
