//! Builder for composing an upstream with middleware layers.
//!
//! Layers are stored outermost-first (last added = outermost) and applied in
//! reverse during `build()`, so `with_retry(..).layer(x)` yields
//! `x(Retry(raw))`.

use std::sync::Arc;

use pokedex_core::{Middleware, PokedexError, RetryConfig, Upstream};
use serde_json::{Value, json};

use crate::retry::RetryMiddleware;

const RETRY: &str = "RetryingUpstream";

/// Generic builder for wrapping a raw upstream in middleware layers.
pub struct UpstreamBuilder {
    raw: Arc<dyn Upstream>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl UpstreamBuilder {
    /// Create a new builder from a raw, unwrapped upstream.
    #[must_use]
    pub fn new(raw: Arc<dyn Upstream>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the retry layer at the outermost position.
    #[must_use]
    pub fn with_retry(mut self, cfg: RetryConfig) -> Self {
        self.layers.retain(|m| m.name() != RETRY);
        self.layers.insert(0, Box::new(RetryMiddleware::new(cfg)));
        self
    }

    /// Remove retries if present.
    #[must_use]
    pub fn without_retry(mut self) -> Self {
        self.layers.retain(|m| m.name() != RETRY);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Snapshot of the stack, outermost first, with the raw upstream last.
    #[must_use]
    pub fn describe(&self) -> Value {
        let mut out: Vec<Value> = self
            .layers
            .iter()
            .map(|l| json!({ "name": l.name(), "config": l.config_json() }))
            .collect();
        out.push(json!({ "name": "RawUpstream", "config": { "name": self.raw.name() } }));
        Value::Array(out)
    }

    /// Validate every layer and build the wrapped upstream.
    ///
    /// # Errors
    /// Returns the first `InvalidArg` reported by a layer's validation.
    pub fn build(self) -> Result<Arc<dyn Upstream>, PokedexError> {
        for m in &self.layers {
            m.validate()?;
        }
        let mut acc: Arc<dyn Upstream> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        Ok(acc)
    }
}
