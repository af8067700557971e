//! roadline-gateway server entry point.
//!
//! Starts the Axum HTTP server and, when configured, the background
//! cache-warming loop.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use roadline_gateway::api;
use roadline_gateway::app_state::{AppState, GatewayStatusService};
use roadline_gateway::config::GatewayConfig;
use roadline_gateway::domain::Road;
use roadline_gateway::persistence::PostgresStatusStore;
use roadline_gateway::scrape::AdvisoryClient;
use roadline_gateway::service::StatusService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting roadline-gateway");

    // Connect the status log
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database_connect_timeout_secs,
        ))
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;

    // Build the resolution service
    let store = Arc::new(PostgresStatusStore::new(pool));
    let fetcher = Arc::new(AdvisoryClient::new(
        config.advisory_endpoint.clone(),
        config.fetch_timeout(),
    )?);
    let status_service: Arc<GatewayStatusService> = Arc::new(StatusService::new(
        store,
        fetcher,
        config.staleness_window(),
        config.fetch_coalesce_enabled,
    ));

    if config.refresh_interval_secs > 0 {
        spawn_refresh_loop(
            Arc::clone(&status_service),
            config.refresh_roads.clone(),
            config.refresh_interval_secs,
        );
    }

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { status_service });

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically warms the cache for the configured roads.
///
/// Fires once at startup, then on every interval tick. Per-road failures
/// are logged and skipped — the loop itself never dies.
fn spawn_refresh_loop(service: Arc<GatewayStatusService>, roads: Vec<Road>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            for road in &roads {
                if let Err(error) = service.resolve(road).await {
                    tracing::warn!(road = %road, error = %error, "background refresh failed");
                }
            }
        }
    });
}
