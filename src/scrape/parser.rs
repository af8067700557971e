//! Advisory page parser.
//!
//! Extracts the source timestamp and the free-text advisory block from the
//! primary content region of a road-condition page. The page layout is
//! fixed upstream: the first line of the content block carries a
//! natural-language timestamp, everything after it is advisory text.

use chrono::{DateTime, NaiveDateTime, Utc};
use scraper::{Html, Selector};
use thiserror::Error;

/// Parsed advisory page.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryPage {
    /// Timestamp the upstream source attributes to the advisory.
    pub source_updated_at: DateTime<Utc>,
    /// Advisory text with the timestamp line removed, lines joined by
    /// single spaces.
    pub advisory_text: String,
}

/// Parse failure for an advisory page.
///
/// Parse failures always propagate: a page we cannot read is *unknown*,
/// never "open", so no default status is ever synthesized from one.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The primary content block is missing or empty.
    #[error("primary content block missing")]
    ContentBlockMissing,
    /// The timestamp line could not be parsed as a calendar date-time.
    #[error("unparsable timestamp line: {0:?}")]
    Timestamp(String),
    /// The document structure could not be processed.
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// CSS selector for the primary content block.
const CONTENT_SELECTOR: &str = ".main-primary p";

/// Accepted layouts of the timestamp line once the weekday segment and
/// period characters have been stripped.
const TIMESTAMP_FORMATS: &[&str] = &["%b %d %Y %I:%M %p", "%b %d %Y %H:%M"];

/// Parses the raw HTML body of an advisory page.
///
/// Selects the concatenated paragraph text of the primary content block,
/// strips forward slashes, then splits on newlines: line 0 is the
/// timestamp line, the remainder joined with spaces is the advisory text.
///
/// # Errors
///
/// Returns [`ParseError::ContentBlockMissing`] when the content block is
/// absent or empty, and [`ParseError::Timestamp`] when the timestamp line
/// does not parse.
pub fn parse_advisory_page(body: &str) -> Result<AdvisoryPage, ParseError> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(CONTENT_SELECTOR)
        .map_err(|e| ParseError::Malformed(e.to_string()))?;

    let text: String = document.select(&selector).flat_map(|p| p.text()).collect();
    if text.trim().is_empty() {
        return Err(ParseError::ContentBlockMissing);
    }

    // Slashes are stripped before splitting so they never survive into
    // either the timestamp line or the advisory text.
    let text = text.replace('/', "");
    let mut lines = text.split('\n');
    let stamp_line = lines.next().ok_or(ParseError::ContentBlockMissing)?;
    let source_updated_at = parse_source_timestamp(stamp_line)?;
    let advisory_text = lines.collect::<Vec<_>>().join(" ");

    Ok(AdvisoryPage {
        source_updated_at,
        advisory_text,
    })
}

/// Parses the timestamp line of the content block.
///
/// The source emits stamps like `"Mon., Jan 5, 2024, 3:45 p.m."`: the
/// leading comma-segment is a weekday and gets dropped, periods are
/// stripped (`p.m.` → `pm`), and the remainder is matched against the
/// known layouts.
fn parse_source_timestamp(line: &str) -> Result<DateTime<Utc>, ParseError> {
    let without_weekday = line.split(',').skip(1).collect::<Vec<_>>().join("");
    let cleaned = without_weekday.replace('.', "");
    let normalized = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    for format in TIMESTAMP_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(stamp.and_utc());
        }
    }
    Err(ParseError::Timestamp(line.to_string()))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{RoadCondition, classify};
    use chrono::{Datelike, Timelike};

    const OPEN_FIXTURE: &str = r#"<html><body>
<div class="main-primary">
<p>Mon., Jan 1, 2024, 1:00 p.m.
NO TRAFFIC RESTRICTIONS ARE REPORTED FOR THIS AREA.</p>
</div>
</body></html>"#;

    #[test]
    fn parses_timestamp_and_advisory_text() {
        let Ok(page) = parse_advisory_page(OPEN_FIXTURE) else {
            panic!("fixture should parse");
        };
        assert_eq!(page.source_updated_at.year(), 2024);
        assert_eq!(page.source_updated_at.month(), 1);
        assert_eq!(page.source_updated_at.day(), 1);
        assert_eq!(page.source_updated_at.hour(), 13);
        assert_eq!(page.source_updated_at.minute(), 0);
        assert_eq!(
            page.advisory_text,
            "NO TRAFFIC RESTRICTIONS ARE REPORTED FOR THIS AREA."
        );
        assert_eq!(classify(&page.advisory_text), RoadCondition::Open);
    }

    #[test]
    fn joins_advisory_lines_with_spaces() {
        let body = r#"<div class="main-primary"><p>Tue., Feb 13, 2024, 6:05 a.m.
IN THE SIERRA NEVADA
CHAINS ARE REQUIRED ON ALL VEHICLES EXCEPT 4-WHEEL DRIVE</p></div>"#;
        let Ok(page) = parse_advisory_page(body) else {
            panic!("fixture should parse");
        };
        assert_eq!(
            page.advisory_text,
            "IN THE SIERRA NEVADA CHAINS ARE REQUIRED ON ALL VEHICLES EXCEPT 4-WHEEL DRIVE"
        );
        assert_eq!(classify(&page.advisory_text), RoadCondition::Chains);
    }

    #[test]
    fn strips_forward_slashes_from_advisory_text() {
        let body = r#"<div class="main-primary"><p>Wed., Mar 6, 2024, 11:30 p.m.
CLOSED FROM ECHO SUMMIT TO MEYERS DUE TO SNOW/ICE</p></div>"#;
        let Ok(page) = parse_advisory_page(body) else {
            panic!("fixture should parse");
        };
        assert_eq!(
            page.advisory_text,
            "CLOSED FROM ECHO SUMMIT TO MEYERS DUE TO SNOWICE"
        );
    }

    #[test]
    fn missing_content_block_fails() {
        let result = parse_advisory_page("<html><body><p>nothing here</p></body></html>");
        assert!(matches!(result, Err(ParseError::ContentBlockMissing)));
    }

    #[test]
    fn unparsable_timestamp_fails() {
        let body = r#"<div class="main-primary"><p>not a timestamp
CLOSED</p></div>"#;
        let result = parse_advisory_page(body);
        assert!(matches!(result, Err(ParseError::Timestamp(_))));
    }

    #[test]
    fn no_default_status_on_failure() {
        // A parse failure must surface as an error, never as an OPEN page.
        let result = parse_advisory_page("<html></html>");
        assert!(result.is_err());
    }

    #[test]
    fn morning_stamp_parses() {
        let Ok(stamp) = parse_source_timestamp("Sat., Dec 21, 2024, 8:15 a.m.") else {
            panic!("stamp should parse");
        };
        assert_eq!(stamp.hour(), 8);
        assert_eq!(stamp.minute(), 15);
    }

    #[test]
    fn concatenates_all_content_paragraphs() {
        let body = r#"<div class="main-primary"><p>Thu., Jul 4, 2024, 9:00 a.m.</p><p>
CONSTRUCTION WORK FROM PLACERVILLE TO CAMINO</p></div>"#;
        let Ok(page) = parse_advisory_page(body) else {
            panic!("fixture should parse");
        };
        assert_eq!(classify(&page.advisory_text), RoadCondition::Construction);
    }
}
