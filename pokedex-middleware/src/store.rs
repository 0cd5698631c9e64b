//! In-memory cache store backed by `moka`.

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use pokedex_core::{CacheKey, CacheStore, CachedDetailRecord};

/// Unbounded in-memory [`CacheStore`].
///
/// Records are neither expired nor evicted for capacity; they stay until
/// [`CacheStore::evict_all`].
#[derive(Clone)]
pub struct MemoryStore {
    entries: Cache<CacheKey, Arc<CachedDetailRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().name("pokedex-details").build(),
        }
    }

    /// Approximate number of cached records.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    /// Whether the store currently holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &CacheKey) -> Option<Arc<CachedDetailRecord>> {
        self.entries.get(key).await
    }

    async fn put(&self, key: CacheKey, value: Arc<CachedDetailRecord>) {
        self.entries.insert(key, value).await;
    }

    async fn evict_all(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks().await;
    }
}
