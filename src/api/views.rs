//! Minimal server-rendered status page.
//!
//! The page is a single self-contained document; no template engine is
//! involved. Advisory text comes from a third-party page and is escaped
//! before interpolation.

use crate::domain::RoadStatusRecord;

/// Renders the HTML status page for a record.
#[must_use]
pub fn status_page(record: &RoadStatusRecord) -> String {
    let verdict = if record.status.is_open() { "YES" } else { "NO" };
    let stamp = record.source_updated_at.format("%B %d, %Y at %-I:%M%p");
    let road = escape_html(record.road.as_str());
    let status = record.status.as_str();
    let description = escape_html(&record.description);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Is {road} open?</title>\n\
         </head>\n\
         <body>\n\
         <main>\n\
         <h1>{verdict}</h1>\n\
         <h2>Highway {road}: {status}</h2>\n\
         <p>{description}</p>\n\
         <p><small>Updated {stamp}</small></p>\n\
         </main>\n\
         </body>\n\
         </html>\n"
    )
}

/// Escapes text for safe interpolation into HTML.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Road, RoadCondition};
    use chrono::Utc;

    fn record(status: RoadCondition) -> RoadStatusRecord {
        RoadStatusRecord {
            road: Road::new("50"),
            status,
            description: "US 50 <EASTBOUND> IS CLOSED".to_string(),
            source_updated_at: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn open_road_says_yes() {
        let page = status_page(&record(RoadCondition::Open));
        assert!(page.contains("<h1>YES</h1>"));
    }

    #[test]
    fn restricted_road_says_no() {
        for status in [
            RoadCondition::Chains,
            RoadCondition::Advisory,
            RoadCondition::Closed,
            RoadCondition::Construction,
        ] {
            let page = status_page(&record(status));
            assert!(page.contains("<h1>NO</h1>"));
            assert!(page.contains(status.as_str()));
        }
    }

    #[test]
    fn advisory_text_is_escaped() {
        let page = status_page(&record(RoadCondition::Closed));
        assert!(page.contains("&lt;EASTBOUND&gt;"));
        assert!(!page.contains("<EASTBOUND>"));
    }
}
