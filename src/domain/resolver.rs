//! Maps an inbound request to a road identifier.
//!
//! Each vanity domain is pinned to one road; the hostname therefore wins
//! over any explicit road parameter, which in turn wins over the default.
//! Resolution is infallible — there is always a road to answer for.

use super::road::Road;

/// Fixed hostname → road table for the vanity domains.
const HOST_ROADS: &[(&str, &str)] = &[
    ("is50open.com", "50"),
    ("is80open.com", "80"),
    ("is88open.com", "88"),
];

/// Road served when neither the hostname nor a parameter selects one.
pub const DEFAULT_ROAD: &str = "50";

/// Resolves the road for a request from the Host header value and an
/// optional explicit road parameter.
///
/// A port suffix on the host (`is50open.com:8080`) is ignored for the
/// table lookup.
#[must_use]
pub fn resolve_road(host: Option<&str>, param: Option<&str>) -> Road {
    if let Some(host) = host {
        let bare = host.rsplit_once(':').map_or(host, |(name, _port)| name);
        if let Some(road) = HOST_ROADS
            .iter()
            .find_map(|(name, road)| (*name == bare).then_some(*road))
        {
            return Road::new(road);
        }
    }
    if let Some(param) = param {
        return Road::new(param);
    }
    Road::new(DEFAULT_ROAD)
}
