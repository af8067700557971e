//! HTTP API layer: route handlers, DTOs, views, and router composition.
//!
//! Public surface: `GET /` and `GET /status` (rendered page for the
//! hostname-resolved road), `GET /road/{road}` (rendered page),
//! `GET /v1/road/{road}` (JSON), `GET /health`.

pub mod dto;
pub mod handlers;
pub mod views;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete router with all endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}
