//! Dictionary page fetching
//!
//! One GET per lookup against the configured dictionary site. Anything other
//! than a 2xx response is an error; the body is returned as text for parsing.

use reqwest::{StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

const MAX_REDIRECTS: usize = 5;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid dictionary URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },
}

pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DictionaryClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|err| FetchError::InvalidUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot have path segments".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(&config.base_url, config.timeout(), &config.user_agent)
    }

    /// Page URL for `word`: the base URL with the word as its last path segment
    pub fn word_url(&self, word: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot have path segments".to_string(),
            })?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    /// Fetch the raw page for `word`
    pub async fn fetch(&self, word: &str) -> Result<String, FetchError> {
        let url = self.word_url(word)?;
        debug!(url = %url, "Fetching dictionary page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!(url = %url, bytes = body.len(), "Fetched dictionary page");
        Ok(body)
    }
}
