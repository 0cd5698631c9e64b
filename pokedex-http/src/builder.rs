use std::sync::Arc;

use pokedex_core::{PokedexConfig, RetryConfig, Upstream};
use pokedex_middleware::UpstreamBuilder;

use crate::HttpUpstream;

/// Builder type alias specialized for the HTTP upstream.
pub type HttpUpstreamBuilder = UpstreamBuilder;

impl HttpUpstream {
    /// Returns a builder around the default client with the default retry policy.
    ///
    /// Customize with the builder methods before calling `.build()`.
    #[must_use]
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> HttpUpstreamBuilder {
        let raw: Arc<dyn Upstream> = Arc::new(Self::new_default());
        UpstreamBuilder::new(raw).with_retry(RetryConfig::default())
    }

    /// Returns a builder around the default client using `config.retry`.
    #[must_use]
    pub fn from_config(config: &PokedexConfig) -> HttpUpstreamBuilder {
        let raw: Arc<dyn Upstream> = Arc::new(Self::new_default());
        UpstreamBuilder::new(raw).with_retry(config.retry)
    }

    /// Expert-only: construct an unwrapped upstream for manual composition.
    #[must_use]
    pub fn new_raw() -> Self {
        Self::new_default()
    }
}
