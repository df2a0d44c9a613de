//! HTTP client for the backend summary endpoints.

use pano_shared::BackendConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::FetchFailure;
use super::types::{DashboardSummary, FinancialSummary, OperationalSummary, SummaryKind};

/// Path of the financial summary endpoint.
const FINANCE_SUMMARY_PATH: &str = "/finance/summary";
/// Path of the operational summary endpoint.
const OPERATIONS_SUMMARY_PATH: &str = "/operations/summary";

/// Client for the backend summary endpoints.
///
/// Holds an explicitly injected base URL and a shared connection pool.
/// Cloning is cheap; clones reuse the pool.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    base_url: String,
    http: Client,
}

impl SummaryClient {
    /// Creates a client for the given base URL.
    ///
    /// Trailing slashes on the base URL are stripped so endpoint paths can
    /// be appended verbatim.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Creates a client from backend configuration.
    #[must_use]
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the financial summary.
    pub async fn fetch_financial_summary(&self) -> Result<FinancialSummary, FetchFailure> {
        self.fetch(SummaryKind::Financial, FINANCE_SUMMARY_PATH)
            .await
    }

    /// Fetches the operational summary.
    pub async fn fetch_operational_summary(&self) -> Result<OperationalSummary, FetchFailure> {
        self.fetch(SummaryKind::Operational, OPERATIONS_SUMMARY_PATH)
            .await
    }

    /// Fetches both summaries concurrently.
    ///
    /// Both requests are in flight simultaneously and the caller suspends
    /// until both complete. Results are paired as (financial, operational)
    /// regardless of completion order. On the first observed failure the
    /// combined fetch fails and the other in-flight request is dropped.
    pub async fn fetch_dashboard(&self) -> Result<DashboardSummary, FetchFailure> {
        let (financial, operational) = tokio::try_join!(
            self.fetch_financial_summary(),
            self.fetch_operational_summary(),
        )?;

        Ok(DashboardSummary {
            financial,
            operational,
        })
    }

    /// Single-shot GET against one summary endpoint. No retries, no timeout,
    /// no partial results.
    async fn fetch<T: DeserializeOwned>(
        &self,
        kind: SummaryKind,
        path: &str,
    ) -> Result<T, FetchFailure> {
        let url = format!("{}{path}", self.base_url);
        debug!(%kind, %url, "Fetching summary");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchFailure::transport(kind, err))?;

        if !response.status().is_success() {
            debug!(%kind, status = %response.status(), "Summary fetch returned non-success status");
            return Err(FetchFailure::status(kind));
        }

        response
            .json()
            .await
            .map_err(|err| FetchFailure::transport(kind, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slashes() {
        let client = SummaryClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let config = BackendConfig {
            base_url: "http://example:9999".to_string(),
        };
        let client = SummaryClient::from_config(&config);
        assert_eq!(client.base_url(), "http://example:9999");
    }
}
