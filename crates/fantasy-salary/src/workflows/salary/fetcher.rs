use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::config::SalaryConfig;

/// Retrieval failure for a remote document. Never parsed further.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("unable to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unable to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Source of raw scorecard documents.
pub trait DocumentFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Single-shot HTTP GET with a browser identity and a request-level timeout.
#[derive(Debug, Clone)]
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpDocumentFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        Self::with_builder(reqwest::Client::builder(), user_agent, timeout)
    }

    pub fn from_config(config: &SalaryConfig) -> Result<Self, FetchError> {
        Self::new(&config.user_agent, config.fetch_timeout)
    }

    fn with_builder(
        builder: reqwest::ClientBuilder,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = builder
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, url: &str, source: reqwest::Error) -> FetchError {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source,
            }
        }
    }
}

impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.classify(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| {
            if source.is_timeout() {
                self.classify(url, source)
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source,
                }
            }
        })?;

        debug!(%url, bytes = body.len(), "scorecard document fetched");
        Ok(body)
    }
}
