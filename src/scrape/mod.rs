//! Outbound scraping layer: advisory fetch client and page parser.

pub mod client;
pub mod parser;

pub use client::{AdvisoryClient, FetchAdvisory};
pub use parser::{AdvisoryPage, ParseError, parse_advisory_page};
