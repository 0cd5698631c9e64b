use async_trait::async_trait;
use serde_json::Value;

use crate::PokedexError;

/// Read-only access to the upstream resource graph.
///
/// Implementations perform a single GET per call and classify failures into
/// `UpstreamUnavailable`, `UpstreamNotFound` or `UpstreamMalformed`. Retrying
/// is layered on top through [`crate::Middleware`].
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Short stable name used in logs and introspection.
    fn name(&self) -> &'static str;

    /// Fetch the document at `url`.
    async fn fetch(&self, url: &str) -> Result<Value, PokedexError>;
}
