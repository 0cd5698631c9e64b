//! Middleware trait for wrapping `Upstream` implementations.

use std::sync::Arc;

use crate::PokedexError;
use crate::upstream::Upstream;

/// Trait implemented by upstream middleware layers.
///
/// A middleware consumes an inner `Upstream` and returns a wrapped upstream
/// that augments its behavior (e.g., retries).
pub trait Middleware: Send + Sync {
    /// Wrap `inner` and return the wrapped upstream.
    fn apply(self: Box<Self>, inner: Arc<dyn Upstream>) -> Arc<dyn Upstream>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;

    /// Reject invalid configuration before the layer is applied.
    ///
    /// # Errors
    /// Returns `InvalidArg` describing the offending setting.
    fn validate(&self) -> Result<(), PokedexError> {
        Ok(())
    }
}
