//! The outbound status request and its implementations.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use common::StatusRecord;

use crate::error::FetchError;

/// Address the viewer requests the status record from.
pub const HEALTH_ENDPOINT: &str = "http://localhost:3001/api/v1/health";

/// Trait for requesting the provider's status record.
#[async_trait]
pub trait StatusFetcher: Send + Sync + 'static {
    /// Issues one status request.
    async fn fetch_status(&self) -> Result<StatusRecord, FetchError>;
}

/// Fetches the status record over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStatusFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpStatusFetcher {
    /// Creates a fetcher targeting [`HEALTH_ENDPOINT`].
    pub fn new() -> Self {
        Self::with_endpoint(HEALTH_ENDPOINT)
    }

    /// Creates a fetcher targeting another address.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the address requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpStatusFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusFetcher for HttpStatusFetcher {
    async fn fetch_status(&self) -> Result<StatusRecord, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "requesting status");

        // The body decides success; the HTTP status code is not inspected.
        let response = self.client.get(&self.endpoint).send().await?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Respond(StatusRecord),
    Fail(String),
    Hang,
}

/// In-memory status fetcher for testing.
///
/// Returns a scripted outcome and counts how often it was called.
#[derive(Debug, Clone)]
pub struct InMemoryStatusFetcher {
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl InMemoryStatusFetcher {
    /// Creates a fetcher that resolves with `record`.
    pub fn responding(record: StatusRecord) -> Self {
        Self::with_outcome(Outcome::Respond(record))
    }

    /// Creates a fetcher that rejects with a network error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Fail(reason.into()))
    }

    /// Creates a fetcher whose request never resolves.
    pub fn hanging() -> Self {
        Self::with_outcome(Outcome::Hang)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the number of requests issued so far, across clones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusFetcher for InMemoryStatusFetcher {
    async fn fetch_status(&self) -> Result<StatusRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Outcome::Respond(record) => Ok(record.clone()),
            Outcome::Fail(reason) => Err(FetchError::Unreachable(reason.clone())),
            Outcome::Hang => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StatusRecord {
        StatusRecord {
            status: "healthy".to_string(),
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn default_endpoint_is_local_health_path() {
        assert_eq!(HEALTH_ENDPOINT, "http://localhost:3001/api/v1/health");
        assert!(HEALTH_ENDPOINT.ends_with(common::HEALTH_PATH));
        assert_eq!(HttpStatusFetcher::new().endpoint(), HEALTH_ENDPOINT);
        assert_eq!(HttpStatusFetcher::default().endpoint(), HEALTH_ENDPOINT);
    }

    #[test]
    fn with_endpoint_overrides_address() {
        let fetcher = HttpStatusFetcher::with_endpoint("http://127.0.0.1:9/api/v1/health");
        assert_eq!(fetcher.endpoint(), "http://127.0.0.1:9/api/v1/health");
    }

    #[tokio::test]
    async fn in_memory_fetcher_responds_and_counts() {
        let fetcher = InMemoryStatusFetcher::responding(sample_record());

        let record = fetcher.fetch_status().await.unwrap();
        assert_eq!(record, sample_record());
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn in_memory_fetcher_fails() {
        let fetcher = InMemoryStatusFetcher::failing("Network error");

        let err = fetcher.fetch_status().await.unwrap_err();
        assert!(matches!(err, FetchError::Unreachable(ref reason) if reason == "Network error"));
    }

    #[tokio::test]
    async fn call_count_is_shared_between_clones() {
        let fetcher = InMemoryStatusFetcher::failing("down");
        let clone = fetcher.clone();

        let _ = clone.fetch_status().await;
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn hanging_fetcher_never_resolves() {
        let fetcher = InMemoryStatusFetcher::hanging();

        let result =
            tokio::time::timeout(std::time::Duration::from_millis(20), fetcher.fetch_status())
                .await;
        assert!(result.is_err());
        assert_eq!(fetcher.call_count(), 1);
    }
}
