use std::time::Duration;

use quotes_core::error::AppError;
use quotes_core::traits::Fetcher;
use reqwest::Client;

/// HTTP fetcher using reqwest.
///
/// Plain GET with no custom headers. Non-success statuses are errors.
/// [`new`](Self::new) sets no request timeout, leaving it to reqwest's
/// defaults; [`with_timeout`](Self::with_timeout) opts into one.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::build(None)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        Self::build(Some(timeout))
    }

    /// Request timeout in effect, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn build(timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self { client, timeout })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout(self.timeout.map_or(0, |t| t.as_secs()))
            } else if e.is_connect() {
                AppError::NetworkError(format!("Connection failed: {e}"))
            } else {
                AppError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpError(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::HttpError(format!("Failed to read response body: {e}")))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Fetched {}", url);
        Ok(body)
    }
}
