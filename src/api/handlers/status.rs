//! Status endpoints: rendered pages and the JSON API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::api::dto::RoadStatusDto;
use crate::api::views;
use crate::app_state::AppState;
use crate::domain::resolve_road;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /status` — Rendered status page for the road resolved from the
/// Host header (falling back to the default road).
///
/// # Errors
///
/// Returns [`GatewayError`] when the status cannot be resolved.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Status",
    summary = "Status page",
    description = "Renders the status page for the road pinned to the request hostname, or the default road.",
    responses(
        (status = 200, description = "Rendered status page"),
        (status = 502, description = "Upstream advisory source unavailable", body = ErrorResponse),
    )
)]
pub async fn status_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let road = resolve_road(host_of(&headers), None);
    let record = state.status_service.resolve(&road).await?;
    Ok(Html(views::status_page(&record)))
}

/// `GET /road/{road}` — Rendered status page for an explicit road.
///
/// The hostname table still wins over the path parameter: a vanity
/// domain always shows its own road.
///
/// # Errors
///
/// Returns [`GatewayError`] when the status cannot be resolved.
#[utoipa::path(
    get,
    path = "/road/{road}",
    tag = "Status",
    summary = "Status page for a road",
    description = "Renders the status page for the given road identifier.",
    params(
        ("road" = String, Path, description = "Road identifier, e.g. `50`"),
    ),
    responses(
        (status = 200, description = "Rendered status page"),
        (status = 502, description = "Upstream advisory source unavailable", body = ErrorResponse),
    )
)]
pub async fn road_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(road): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let road = resolve_road(host_of(&headers), Some(&road));
    let record = state.status_service.resolve(&road).await?;
    Ok(Html(views::status_page(&record)))
}

/// `GET /v1/road/{road}` — JSON status for a road.
///
/// # Errors
///
/// Returns [`GatewayError`] when the status cannot be resolved.
#[utoipa::path(
    get,
    path = "/v1/road/{road}",
    tag = "Status",
    summary = "Road status as JSON",
    description = "Returns the classified status, advisory text and source timestamp for the given road.",
    params(
        ("road" = String, Path, description = "Road identifier, e.g. `50`"),
    ),
    responses(
        (status = 200, description = "Current road status", body = RoadStatusDto),
        (status = 502, description = "Upstream advisory source unavailable", body = ErrorResponse),
    )
)]
pub async fn road_api(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(road): Path<String>,
) -> Result<axum::Json<RoadStatusDto>, GatewayError> {
    let road = resolve_road(host_of(&headers), Some(&road));
    let record = state.status_service.resolve(&road).await?;
    Ok(axum::Json(RoadStatusDto::from(record)))
}

/// Host header value, if present and valid UTF-8.
fn host_of(headers: &HeaderMap) -> Option<&str> {
    headers.get(HOST).and_then(|value| value.to_str().ok())
}

/// Status routes. The root path serves the same page as `/status`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(status_page))
        .route("/status", get(status_page))
        .route("/road/{road}", get(road_page))
        .route("/v1/road/{road}", get(road_api))
}
