//! PostgreSQL implementation of the status store.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::StatusStore;
use crate::domain::{Road, RoadCondition, RoadStatusRecord};
use crate::error::GatewayError;

/// PostgreSQL-backed status store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStatusStore {
    pool: PgPool,
}

impl PostgresStatusStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl StatusStore for PostgresStatusStore {
    async fn insert(&self, record: &RoadStatusRecord) -> Result<(), GatewayError> {
        sqlx::query(
            "INSERT INTO road_statuses (road_name, status, description, source_updated_at, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.road.as_str())
        .bind(record.status.as_str())
        .bind(&record.description)
        .bind(record.source_updated_at)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(())
    }

    async fn latest_within(
        &self,
        road: &Road,
        cutoff: DateTime<Utc>,
    ) -> Result<Option<RoadStatusRecord>, GatewayError> {
        let row = sqlx::query_as::<_, (String, String, String, DateTime<Utc>, DateTime<Utc>)>(
            "SELECT road_name, status, description, source_updated_at, created_at \
             FROM road_statuses \
             WHERE road_name = $1 AND source_updated_at >= $2 \
             ORDER BY source_updated_at DESC \
             LIMIT 1",
        )
        .bind(road.as_str())
        .bind(cutoff)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        row.map(
            |(road_name, status, description, source_updated_at, created_at)| {
                let status = RoadCondition::parse(&status).ok_or_else(|| {
                    GatewayError::Persistence(format!("unknown status value: {status}"))
                })?;
                Ok(RoadStatusRecord {
                    road: Road::new(road_name),
                    status,
                    description,
                    source_updated_at,
                    created_at,
                })
            },
        )
        .transpose()
    }
}
