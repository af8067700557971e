//! Service layer: the status resolution pipeline.

pub mod status_service;

pub use status_service::StatusService;
