//! HTTP client for the OMDb title search.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::config::{ApiConfig, SecureString};

use super::error::LookupError;
use super::types::{parse_search_response, MovieSummary};

/// Source of movie summaries.
///
/// The UI only talks to this trait so lookups can be faked in tests.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Look up the best match for `title`.
    async fn search(&self, title: &str) -> Result<MovieSummary, LookupError>;
}

/// Errors raised while building the client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL '{base_url}': {message}")]
    InvalidBaseUrl { base_url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Client for the OMDb search endpoint.
///
/// Issues a single GET per lookup with `apikey` and `s` query parameters.
/// No retries.
pub struct OmdbClient {
    client: Client,
    base_url: Url,
    api_key: SecureString,
}

impl OmdbClient {
    /// Create a client from the API section of the config.
    ///
    /// A timeout is only applied when `timeout_seconds` is set.
    pub fn new(api: &ApiConfig, api_key: SecureString) -> Result<Self, ClientError> {
        let base_url = Url::parse(&api.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: api.base_url.clone(),
            message: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL. Contains the API key, never log it.
    fn search_url(&self, title: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", self.api_key.expose())
            .append_pair("s", title);
        url
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn search(&self, title: &str) -> Result<MovieSummary, LookupError> {
        if title.trim().is_empty() {
            return Err(LookupError::EmptyTitle);
        }

        tracing::debug!(
            base_url = %self.base_url,
            title = %title,
            "Sending movie lookup"
        );

        let start = Instant::now();
        let response = self
            .client
            .get(self.search_url(title))
            .send()
            .await
            .map_err(|source| LookupError::Transport {
                title: title.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, title = %title, "Movie lookup rejected");
            return Err(LookupError::Http {
                title: title.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| LookupError::Transport {
                title: title.to_string(),
                source,
            })?;

        let summary = parse_search_response(title, &body)?;

        tracing::debug!(
            title = %title,
            external_id = %summary.external_id,
            latency_ms = start.elapsed().as_millis() as u64,
            "Movie lookup finished"
        );

        Ok(summary)
    }
}
