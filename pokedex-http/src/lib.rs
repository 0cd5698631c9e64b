//! pokedex-http
//!
//! [`Upstream`] implementation that talks to the public REST API over HTTP.
//!
//! A single [`HttpUpstream::fetch`] performs one GET and classifies the
//! outcome:
//!
//! - transport errors and 5xx answers → `UpstreamUnavailable` (retryable)
//! - 4xx answers → `UpstreamNotFound`
//! - bodies that are not JSON → `UpstreamMalformed`
//!
//! Use [`HttpUpstream::new`] to get a builder preconfigured with the default
//! retry policy, or [`HttpUpstream::new_raw`] for the bare client.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use pokedex_core::{PokedexError, Upstream};
use reqwest::header::ACCEPT;
use serde_json::Value;

mod builder;

pub use builder::HttpUpstreamBuilder;

/// HTTP upstream backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Static connector key used in logs and stack descriptions.
    pub const KEY: &'static str = "pokedex-http";

    /// Build with a default `reqwest::Client`.
    #[must_use]
    pub fn new_default() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Build from a provided `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build with a per-request timeout applied by the HTTP client.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the client cannot be constructed.
    pub fn try_with_timeout(timeout: Duration) -> Result<Self, PokedexError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PokedexError::InvalidArg(format!("http client: {e}")))?;
        Ok(Self::with_client(client))
    }

    fn classify_status(url: &str, status: reqwest::StatusCode) -> Result<(), PokedexError> {
        if status.is_success() {
            Ok(())
        } else if status.is_client_error() {
            Err(PokedexError::not_found(url))
        } else {
            Err(PokedexError::unavailable(url, format!("status {status}")))
        }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    fn name(&self) -> &'static str {
        Self::KEY
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pokedex_http::fetch", skip(self), level = "debug")
    )]
    async fn fetch(&self, url: &str) -> Result<Value, PokedexError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| PokedexError::unavailable(url, e.to_string()))?;

        let status = resp.status();
        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), "upstream answered");
        Self::classify_status(url, status)?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| PokedexError::unavailable(url, e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| PokedexError::malformed(url, e.to_string()))
    }
}
