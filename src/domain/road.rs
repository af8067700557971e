//! Type-safe road identifier.
//!
//! [`Road`] is a newtype wrapper around the highway token ("50", "80", …)
//! providing type safety so road identifiers cannot be confused with other
//! request strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a highway whose status can be requested.
///
/// The token is whatever the upstream source accepts as a `roadnumber`
/// form value — usually a bare route number such as `"50"` or `"80"`.
/// Used as the cache key in the status store and as the outbound request
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Road(String);

impl Road {
    /// Creates a `Road` from any string-like token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the road token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Road {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Road {
    fn from(token: String) -> Self {
        Self(token)
    }
}
