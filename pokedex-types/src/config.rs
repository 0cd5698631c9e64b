//! Configuration types shared by the engine, middleware and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default detail/listing endpoint of the public upstream.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Default placeholder served when a record has no image at all.
pub const DEFAULT_IMAGE_NOT_AVAILABLE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/a/ac/No_image_available.svg";

/// Exponential backoff policy for transient upstream failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first one (>= 1).
    pub max_attempts: u32,
    /// Delay before the second attempt, in milliseconds.
    pub min_backoff_ms: u64,
    /// Upper bound for any single delay, in milliseconds.
    pub max_backoff_ms: u64,
    /// Exponential factor applied after each failed attempt (>= 1).
    pub factor: u32,
    /// Random jitter percentage [0, 100] added to each delay.
    pub jitter_percent: u8,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_backoff_ms: 2_000,
            max_backoff_ms: 30_000,
            factor: 2,
            jitter_percent: 20,
        }
    }
}

impl RetryConfig {
    /// Base delay (before jitter) to wait after the given failed attempt.
    ///
    /// `attempt` is 1-based: the delay after the first failure is
    /// `min_backoff_ms`, then it grows by `factor` and saturates at
    /// `max_backoff_ms`.
    #[must_use]
    pub fn delay_ms_after(&self, attempt: u32) -> u64 {
        let exp = attempt.saturating_sub(1);
        let mult = u64::from(self.factor).saturating_pow(exp);
        self.min_backoff_ms
            .saturating_mul(mult)
            .min(self.max_backoff_ms)
    }
}

/// Global configuration for the `Pokedex` engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokedexConfig {
    /// Detail/listing endpoint; details live at `<base>/<id>`.
    pub base_url: String,
    /// Image used when a record carries neither a list nor a detail image.
    pub image_not_available_url: String,
    /// Optional deadline for page, evolution and combined detail requests.
    pub request_timeout: Option<Duration>,
    /// Retry policy applied to upstream calls by default connectors.
    pub retry: RetryConfig,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_not_available_url: DEFAULT_IMAGE_NOT_AVAILABLE_URL.to_string(),
            request_timeout: None,
            retry: RetryConfig::default(),
        }
    }
}
