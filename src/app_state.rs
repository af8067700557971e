//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::PostgresStatusStore;
use crate::scrape::AdvisoryClient;
use crate::service::StatusService;

/// The status service instantiation used by the running server: Postgres
/// store plus live advisory client.
pub type GatewayStatusService = StatusService<PostgresStatusStore, AdvisoryClient>;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Resolution service for all status lookups.
    pub status_service: Arc<GatewayStatusService>,
}
