//! Road status response DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{RoadCondition, RoadStatusRecord};

/// JSON wire shape for a road status.
///
/// Field casing is fixed by the public API: `UpdatedAt` is capitalized
/// for historical compatibility with existing consumers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoadStatusDto {
    /// Road identifier.
    pub name: String,
    /// Classified status category.
    pub status: RoadCondition,
    /// Free-text advisory detail.
    pub description: String,
    /// Timestamp the source attributes to the advisory.
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<RoadStatusRecord> for RoadStatusDto {
    fn from(record: RoadStatusRecord) -> Self {
        Self {
            name: record.road.as_str().to_string(),
            status: record.status,
            description: record.description,
            updated_at: record.source_updated_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Road;

    #[test]
    fn serializes_with_public_field_casing() {
        let dto = RoadStatusDto::from(RoadStatusRecord {
            road: Road::new("50"),
            status: RoadCondition::Chains,
            description: "CHAINS ARE REQUIRED ON ALL VEHICLES".to_string(),
            source_updated_at: Utc::now(),
            created_at: Utc::now(),
        });
        let Ok(json) = serde_json::to_value(&dto) else {
            panic!("serialization failed");
        };
        assert_eq!(json.get("name").and_then(|v| v.as_str()), Some("50"));
        assert_eq!(json.get("status").and_then(|v| v.as_str()), Some("CHAINS"));
        assert!(json.get("UpdatedAt").is_some());
        assert!(json.get("updated_at").is_none());
    }
}
