//! Status resolution service.
//!
//! Orchestrates the pipeline behind every request: cache lookup, then on a
//! miss fetch → parse → classify → persist. No retries and no stale-cache
//! fallback — a failed stage fails the resolution.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use crate::domain::{Road, RoadStatusRecord, classify};
use crate::error::GatewayError;
use crate::persistence::StatusStore;
use crate::scrape::{FetchAdvisory, parse_advisory_page};

/// Orchestration layer resolving the current status of a road.
///
/// Generic over the store and fetcher seams so the pipeline can be
/// exercised end-to-end against fixtures. The staleness window decides
/// whether a cached record is still served; records outside it are
/// ignored, never deleted.
#[derive(Debug)]
pub struct StatusService<S, F> {
    store: Arc<S>,
    fetcher: Arc<F>,
    staleness_window: Duration,
    coalesce: bool,
    flights: Mutex<HashMap<Road, Arc<Mutex<()>>>>,
}

impl<S, F> StatusService<S, F>
where
    S: StatusStore + 'static,
    F: FetchAdvisory + 'static,
{
    /// Creates a new service.
    ///
    /// With `coalesce` enabled, concurrent cache misses for the same road
    /// collapse into a single outbound fetch; disabled, overlapping
    /// misses each fetch and each append a record, which the recency read
    /// tolerates.
    #[must_use]
    pub fn new(store: Arc<S>, fetcher: Arc<F>, staleness_window: Duration, coalesce: bool) -> Self {
        Self {
            store,
            fetcher,
            staleness_window,
            coalesce,
            flights: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves the current status of `road`.
    ///
    /// Serves the most recent cached record still inside the staleness
    /// window; otherwise runs the refresh pipeline and serves its result.
    ///
    /// # Errors
    ///
    /// Propagates [`GatewayError::Fetch`], [`GatewayError::Parse`] and
    /// [`GatewayError::Persistence`] from the refresh pipeline. A failure
    /// aborts the resolution — no stale record is substituted.
    pub async fn resolve(&self, road: &Road) -> Result<RoadStatusRecord, GatewayError> {
        if let Some(record) = self.lookup(road).await? {
            tracing::debug!(road = %road, status = %record.status, "cache hit");
            return Ok(record);
        }

        if self.coalesce {
            let flight = self.flight_lock(road).await;
            let _guard = flight.lock().await;
            // Another caller may have refreshed while we waited.
            if let Some(record) = self.lookup(road).await? {
                return Ok(record);
            }
            self.refresh(road).await
        } else {
            self.refresh(road).await
        }
    }

    async fn lookup(&self, road: &Road) -> Result<Option<RoadStatusRecord>, GatewayError> {
        let cutoff = Utc::now() - self.staleness_window;
        self.store.latest_within(road, cutoff).await
    }

    /// Runs fetch → parse → classify → persist on a spawned task so a
    /// completed fetch still lands in the cache when the triggering
    /// request is abandoned mid-flight.
    async fn refresh(&self, road: &Road) -> Result<RoadStatusRecord, GatewayError> {
        let store = Arc::clone(&self.store);
        let fetcher = Arc::clone(&self.fetcher);
        let road = road.clone();

        tokio::spawn(async move {
            let body = fetcher.fetch(&road).await?;
            let page = parse_advisory_page(&body)?;
            let status = classify(&page.advisory_text);
            let record = RoadStatusRecord {
                road,
                status,
                description: page.advisory_text,
                source_updated_at: page.source_updated_at,
                created_at: Utc::now(),
            };
            store.insert(&record).await?;
            tracing::info!(
                road = %record.road,
                status = %record.status,
                source_updated_at = %record.source_updated_at,
                "status refreshed"
            );
            Ok(record)
        })
        .await
        .map_err(|e| GatewayError::Internal(format!("refresh task failed: {e}")))?
    }

    async fn flight_lock(&self, road: &Road) -> Arc<Mutex<()>> {
        let mut flights = self.flights.lock().await;
        Arc::clone(flights.entry(road.clone()).or_default())
    }
}
