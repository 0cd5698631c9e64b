//! Retry wrapper for transient upstream failures.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pokedex_core::{Middleware, PokedexError, RetryConfig, Upstream};
use rand::Rng;
use serde_json::Value;

/// Add up to `jitter_percent` percent of random jitter to `base_ms`.
#[must_use]
pub fn jitter_wait(base_ms: u64, jitter_percent: u32) -> u64 {
    let jitter_range = if jitter_percent == 0 {
        1
    } else {
        std::cmp::max(1, base_ms.saturating_mul(u64::from(jitter_percent)) / 100)
    };
    let mut rng = rand::rng();
    base_ms.saturating_add(rng.random_range(0..jitter_range))
}

/// Upstream wrapper that retries retryable failures with exponential backoff.
///
/// Only errors for which [`PokedexError::is_retryable`] holds are retried;
/// not-found and malformed answers are returned on the first attempt.
pub struct RetryingUpstream {
    inner: Arc<dyn Upstream>,
    config: RetryConfig,
}

impl RetryingUpstream {
    /// Wrap `inner` with the given policy.
    #[must_use]
    pub fn new(inner: Arc<dyn Upstream>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Access the inner upstream.
    #[must_use]
    pub fn inner(&self) -> &Arc<dyn Upstream> {
        &self.inner
    }

    /// The active policy.
    #[must_use]
    pub const fn config(&self) -> &RetryConfig {
        &self.config
    }
}

#[async_trait]
impl Upstream for RetryingUpstream {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn fetch(&self, url: &str) -> Result<Value, PokedexError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.inner.fetch(url).await {
                Ok(doc) => return Ok(doc),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    let wait_ms = jitter_wait(
                        self.config.delay_ms_after(attempt),
                        u32::from(self.config.jitter_percent),
                    );
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        target = "pokedex::retry",
                        url,
                        attempt,
                        max_attempts,
                        wait_ms,
                        error = %e,
                        "upstream call failed; retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(wait_ms)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Middleware config for constructing a [`RetryingUpstream`].
pub struct RetryMiddleware {
    pub config: RetryConfig,
}

impl RetryMiddleware {
    #[must_use]
    pub const fn new(config: RetryConfig) -> Self {
        Self { config }
    }
}

impl Middleware for RetryMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn Upstream>) -> Arc<dyn Upstream> {
        Arc::new(RetryingUpstream::new(inner, self.config))
    }

    fn name(&self) -> &'static str {
        "RetryingUpstream"
    }

    fn config_json(&self) -> Value {
        serde_json::json!({
            "max_attempts": self.config.max_attempts,
            "min_backoff_ms": self.config.min_backoff_ms,
            "max_backoff_ms": self.config.max_backoff_ms,
            "factor": self.config.factor,
            "jitter_percent": self.config.jitter_percent,
        })
    }

    fn validate(&self) -> Result<(), PokedexError> {
        let c = &self.config;
        if c.max_attempts == 0 {
            return Err(PokedexError::InvalidArg(
                "retry max_attempts must be at least 1".into(),
            ));
        }
        if c.factor == 0 {
            return Err(PokedexError::InvalidArg(
                "retry factor must be at least 1".into(),
            ));
        }
        if c.min_backoff_ms > c.max_backoff_ms {
            return Err(PokedexError::InvalidArg(format!(
                "retry min_backoff_ms ({}) exceeds max_backoff_ms ({})",
                c.min_backoff_ms, c.max_backoff_ms
            )));
        }
        if c.jitter_percent > 100 {
            return Err(PokedexError::InvalidArg(
                "retry jitter_percent must be within 0..=100".into(),
            ));
        }
        Ok(())
    }
}
