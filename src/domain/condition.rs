//! Road condition categories and the advisory-text classifier.
//!
//! Classification walks a fixed, ordered table of literal substring rules
//! over the advisory text. Every rule is visited; when several patterns
//! match, the last matching rule wins, so table order is load-bearing.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status category of a road, as served to clients.
///
/// Closed set: the classifier always yields one of these values and
/// defaults to [`RoadCondition::Open`] when no pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoadCondition {
    /// No restriction reported.
    Open,
    /// Chain controls are in effect.
    Chains,
    /// An advisory is active (weather, visibility, …).
    Advisory,
    /// The road is closed.
    Closed,
    /// Construction work is restricting traffic.
    Construction,
}

impl RoadCondition {
    /// Whether the road has no reported restriction.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Canonical uppercase token, matching the JSON and database encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Chains => "CHAINS",
            Self::Advisory => "ADVISORY",
            Self::Closed => "CLOSED",
            Self::Construction => "CONSTRUCTION",
        }
    }

    /// Parses the canonical uppercase token back into a condition.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "OPEN" => Some(Self::Open),
            "CHAINS" => Some(Self::Chains),
            "ADVISORY" => Some(Self::Advisory),
            "CLOSED" => Some(Self::Closed),
            "CONSTRUCTION" => Some(Self::Construction),
            _ => None,
        }
    }
}

impl fmt::Display for RoadCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered classification rules, built once and shared by reference.
///
/// Later entries override earlier ones when multiple patterns match.
/// Patterns are matched as literal, case-sensitive substrings against the
/// un-normalized advisory text; the trailing space in the chains pattern
/// is part of the upstream phrasing and must not be trimmed.
const CLASSIFIER_RULES: &[(&str, RoadCondition)] = &[
    (
        "NO TRAFFIC RESTRICTIONS ARE REPORTED FOR THIS AREA.",
        RoadCondition::Open,
    ),
    ("CHAINS ARE REQUIRED ", RoadCondition::Chains),
    ("ADVISORY", RoadCondition::Advisory),
    ("CLOSED", RoadCondition::Closed),
    ("CONSTRUCTION", RoadCondition::Construction),
];

/// Classifies an advisory text into a [`RoadCondition`].
///
/// Evaluates every rule in table order without early exit; the last
/// matching rule's category is returned. Texts matching no rule are
/// reported as [`RoadCondition::Open`].
#[must_use]
pub fn classify(advisory_text: &str) -> RoadCondition {
    let mut condition = RoadCondition::Open;
    for (pattern, category) in CLASSIFIER_RULES {
        if advisory_text.contains(pattern) {
            condition = *category;
        }
    }
    condition
}
