//! Persistence layer: append-only road status log in PostgreSQL.
//!
//! The `road_statuses` table is an immutable event log. Writers only
//! append; readers ask for the most recent record inside the staleness
//! window. Concurrent duplicate writes for the same road are therefore
//! harmless — the recency query resolves them without locking.

pub mod postgres;

pub use postgres::PostgresStatusStore;

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{Road, RoadStatusRecord};
use crate::error::GatewayError;

/// Append-only store of classified road status observations.
pub trait StatusStore: Send + Sync {
    /// Appends a new status record. Never overwrites an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on storage failure.
    fn insert(
        &self,
        record: &RoadStatusRecord,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    /// Most recent record for `road` whose `source_updated_at >= cutoff`,
    /// or `None` when nothing falls inside the window — even if older
    /// records exist.
    ///
    /// Recency is judged on `source_updated_at`, not insertion order: a
    /// fetch that returned an older source timestamp never shadows a
    /// newer one.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on storage failure.
    fn latest_within(
        &self,
        road: &Road,
        cutoff: DateTime<Utc>,
    ) -> impl Future<Output = Result<Option<RoadStatusRecord>, GatewayError>> + Send;
}
