use std::sync::Arc;
use std::time::Duration;

use pokedex_core::{CacheStore, PokedexConfig, PokedexError, Upstream, parse_base_url};
use pokedex_middleware::MemoryStore;
use url::Url;

use crate::inflight::InFlight;

/// Aggregation engine over a single upstream and cache store.
///
/// Cloning is cheap; clones share the upstream, the store and the in-flight
/// map.
#[derive(Clone)]
pub struct Pokedex {
    pub(crate) upstream: Arc<dyn Upstream>,
    pub(crate) store: Arc<dyn CacheStore>,
    pub(crate) inflight: Arc<InFlight>,
    pub(crate) base_url: Arc<Url>,
    pub(crate) cfg: Arc<PokedexConfig>,
}

/// Builder for constructing a [`Pokedex`] with custom configuration.
pub struct PokedexBuilder {
    upstream: Option<Arc<dyn Upstream>>,
    store: Option<Arc<dyn CacheStore>>,
    cfg: PokedexConfig,
}

impl Default for PokedexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PokedexBuilder {
    /// Create a new builder with default configuration.
    ///
    /// An upstream must be supplied via [`with_upstream`](Self::with_upstream).
    /// Without an explicit store, `build()` creates an unbounded
    /// [`MemoryStore`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            upstream: None,
            store: None,
            cfg: PokedexConfig::default(),
        }
    }

    /// Set the upstream data source.
    #[must_use]
    pub fn with_upstream(mut self, upstream: Arc<dyn Upstream>) -> Self {
        self.upstream = Some(upstream);
        self
    }

    /// Set the cache store. The store's lifecycle belongs to the caller.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PokedexConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the detail/listing endpoint.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.base_url = url.into();
        self
    }

    /// Set the placeholder used when a record has no image.
    #[must_use]
    pub fn image_not_available_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.image_not_available_url = url.into();
        self
    }

    /// Bound `page`, `evolution` and `detail` by an overall deadline.
    ///
    /// When exceeded, the call fails with `RequestTimeout` naming the
    /// operation. Work already issued keeps running in the background only
    /// as far as it is shared with other callers.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Pokedex`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no upstream was supplied, the base URL is not
    /// an absolute http(s) URL, the placeholder image is empty, or the
    /// request timeout is zero.
    pub fn build(self) -> Result<Pokedex, PokedexError> {
        let upstream = self.upstream.ok_or_else(|| {
            PokedexError::InvalidArg(
                "no upstream configured; add one via with_upstream(...)".to_string(),
            )
        })?;
        let base_url = parse_base_url(&self.cfg.base_url)?;
        if self.cfg.image_not_available_url.trim().is_empty() {
            return Err(PokedexError::InvalidArg(
                "image_not_available_url must not be empty".to_string(),
            ));
        }
        if self.cfg.request_timeout == Some(Duration::ZERO) {
            return Err(PokedexError::InvalidArg(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));

        Ok(Pokedex {
            upstream,
            store,
            inflight: Arc::new(InFlight::default()),
            base_url: Arc::new(base_url),
            cfg: Arc::new(self.cfg),
        })
    }
}

impl Pokedex {
    /// Start building a new `Pokedex`.
    #[must_use]
    pub fn builder() -> PokedexBuilder {
        PokedexBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &PokedexConfig {
        &self.cfg
    }

    /// Name of the configured upstream.
    #[must_use]
    pub fn upstream_name(&self) -> &'static str {
        self.upstream.name()
    }

    /// Run `fut` under the configured request deadline, if any.
    pub(crate) async fn with_request_deadline<T, Fut>(
        &self,
        capability: &'static str,
        fut: Fut,
    ) -> Result<T, PokedexError>
    where
        Fut: Future<Output = Result<T, PokedexError>>,
    {
        match self.cfg.request_timeout {
            Some(deadline) => tokio::time::timeout(deadline, fut)
                .await
                .unwrap_or_else(|_| Err(PokedexError::request_timeout(capability))),
            None => fut.await,
        }
    }
}
