//! # roadline-gateway
//!
//! HTTP gateway answering "is road X open?" from Caltrans road-condition
//! advisories.
//!
//! Every request resolves a road identifier, then runs the core pipeline:
//! check the cache, and on a miss fetch the advisory page, parse out the
//! source timestamp and advisory text, classify the text into a status
//! category, and append the result to the status log. Everything around
//! that pipeline — route dispatch, hostname mapping, page rendering — is
//! thin glue.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST + page handlers (api/)
//!     │
//!     ├── StatusService (service/)
//!     │       │
//!     │       ├── PostgreSQL status log (persistence/)
//!     │       └── AdvisoryClient → page parser → classifier (scrape/, domain/)
//!     │
//!     └── Road resolution: hostname table > parameter > default (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod scrape;
pub mod service;
