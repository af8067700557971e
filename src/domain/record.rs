//! Road status records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::condition::RoadCondition;
use super::road::Road;

/// One classified advisory observation for a road.
///
/// Records are immutable after creation: every successful fetch appends a
/// new record rather than updating an existing one, and stale records
/// simply stop being read once they fall outside the staleness window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadStatusRecord {
    /// Road the advisory applies to.
    pub road: Road,
    /// Classified status category.
    pub status: RoadCondition,
    /// Free-text advisory detail, original casing and spacing preserved.
    pub description: String,
    /// Timestamp the upstream source attributes to the advisory. This is
    /// parsed from the page text, not the time we observed it.
    pub source_updated_at: DateTime<Utc>,
    /// When this record was produced. Audit field; staleness is judged on
    /// `source_updated_at`.
    pub created_at: DateTime<Utc>,
}
