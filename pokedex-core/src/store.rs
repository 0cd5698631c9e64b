use std::sync::Arc;

use async_trait::async_trait;

use crate::{CacheKey, CachedDetailRecord};

/// Key/value store for resolved detail records.
///
/// Records live until [`CacheStore::evict_all`]. Implementations must not
/// expire entries by time or drop them for capacity.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Short stable name used in logs and introspection.
    fn name(&self) -> &'static str;

    /// Look up a record.
    async fn get(&self, key: &CacheKey) -> Option<Arc<CachedDetailRecord>>;

    /// Insert or replace a record.
    async fn put(&self, key: CacheKey, value: Arc<CachedDetailRecord>);

    /// Drop every record. Idempotent.
    async fn evict_all(&self);
}
