//! Upstream metadata provider client.
//!
//! The provider is an external HTTP service queried with `group` and
//! `song` parameters; it answers with a JSON object carrying the
//! release date, the full lyric text, and an external link. Failures
//! here are fatal to the creation flow that triggered the fetch.

use std::time::Duration;

use reqwest::Client;

use cantoria_core::model::SongDetails;

use crate::error::{CatalogError, CatalogResult};
use crate::throttle::Throttle;

pub(crate) const PROVIDER_NAME: &str = "metadata provider";

/// Public lyric APIs tend to rate-limit aggressively.
const REQUESTS_PER_SECOND: u32 = 5;

/// Metadata provider API client.
///
/// Wraps an HTTP client, the provider's configured base URL, and a
/// request throttle. Requests are never retried; a failed fetch is
/// reported to the caller as-is.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    base_url: String,
    throttle: Throttle,
}

impl ProviderClient {
    /// Create a new provider client for the given base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("cantoria/0.1.0 (https://github.com/oxur/cantoria)")
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            throttle: Throttle::new(REQUESTS_PER_SECOND),
        })
    }

    /// The configured provider base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the details record for a (group, title) pair.
    pub async fn fetch_details(&self, group: &str, title: &str) -> CatalogResult<SongDetails> {
        self.throttle.acquire().await;

        log::debug!("Fetching details for {} - {}", group, title);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("group", group), ("song", title)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| CatalogError::Upstream {
                source_name: PROVIDER_NAME.to_string(),
                message: e.to_string(),
            })?;

        let details: SongDetails = response.json().await.map_err(|e| CatalogError::Parse {
            source_name: PROVIDER_NAME.to_string(),
            message: e.to_string(),
        })?;

        Ok(details)
    }
}
