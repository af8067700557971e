//! Outbound advisory fetch client.

use std::future::Future;
use std::time::Duration;

use crate::domain::Road;
use crate::error::GatewayError;

/// Fetches the raw advisory document for a road.
///
/// Seam trait so the resolution pipeline can run against fixture
/// documents in tests instead of the live endpoint.
pub trait FetchAdvisory: Send + Sync {
    /// Fetches the advisory page body for `road`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Fetch`] on transport failure, timeout, or a
    /// non-success HTTP status.
    fn fetch(&self, road: &Road) -> impl Future<Output = Result<String, GatewayError>> + Send;
}

/// `reqwest`-backed advisory client.
///
/// Issues one form-encoded POST per call to the configured endpoint with
/// the road token as the `roadnumber` field. No retries — every failure
/// surfaces immediately and the caller decides what to do with it.
#[derive(Debug, Clone)]
pub struct AdvisoryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AdvisoryClient {
    /// Builds a client with a bounded request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(e.to_string()))?;
        Ok(Self { http, endpoint })
    }
}

impl FetchAdvisory for AdvisoryClient {
    async fn fetch(&self, road: &Road) -> Result<String, GatewayError> {
        tracing::debug!(road = %road, endpoint = %self.endpoint, "fetching advisory");

        let params = [("roadnumber", road.as_str())];
        let response = self
            .http
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| GatewayError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Fetch(format!("status code {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| GatewayError::Fetch(e.to_string()))
    }
}
