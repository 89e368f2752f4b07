//! Upstream feed source client.
//!
//! Fetches the bounded source collection from `{api_base_url}/posts`. The
//! session token, when present, rides along as a bearer header even though
//! the public upstream ignores it; a real backend substitution gets the
//! header for free.

use std::fmt;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use url::Url;

use super::SourceItem;
use crate::config::Config;

/// Failure modes of a feed fetch. One failure is surfaced per attempt; no
/// automatic retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Transport-level failure: unreachable host, timeout, malformed body.
    Network(String),
    /// The server answered with a non-success status.
    Server { status: u16 },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Network(reason) => write!(f, "network error: {reason}"),
            FeedError::Server { status } => write!(f, "server error (HTTP {status})"),
        }
    }
}

impl std::error::Error for FeedError {}

/// HTTP client for the feed source collaborator.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    posts_url: Url,
    token: Option<String>,
}

impl FeedClient {
    /// Builds a client from config plus the current session token.
    ///
    /// # Errors
    /// Returns an error if the configured base URL is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &Config, token: Option<String>) -> Result<Self> {
        // Normalize to a trailing slash so join() appends instead of replacing
        // the last path segment.
        let base = Url::parse(&format!("{}/", config.api_base_url.trim_end_matches('/')))
            .with_context(|| format!("Invalid api_base_url: {}", config.api_base_url))?;
        let posts_url = base
            .join("posts")
            .with_context(|| format!("Invalid api_base_url: {}", config.api_base_url))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            posts_url,
            token,
        })
    }

    /// Fetches the upstream source collection.
    ///
    /// # Errors
    /// `FeedError::Network` on transport or decode failure, `FeedError::Server`
    /// on a non-success status.
    pub async fn fetch_source(&self) -> Result<Vec<SourceItem>, FeedError> {
        let mut request = self.http.get(self.posts_url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!("feed fetch failed: {e}");
            FeedError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("feed fetch returned HTTP {status}");
            return Err(FeedError::Server {
                status: status.as_u16(),
            });
        }

        let source: Vec<SourceItem> = response.json().await.map_err(|e| {
            warn!("feed response decode failed: {e}");
            FeedError::Network(format!("invalid response body: {e}"))
        })?;

        debug!("fetched {} source items", source.len());
        Ok(source)
    }
}
