//! Per-key coalescing of detail resolutions.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, Shared};
use pokedex_core::{CacheKey, CacheStore, CachedDetailRecord, PokedexError};
use tokio::sync::{Mutex, MutexGuard};

pub(crate) type FlightResult = Result<Arc<CachedDetailRecord>, PokedexError>;

/// Pending resolution shared by every caller of the same key.
pub(crate) type Flight = Shared<BoxFuture<'static, FlightResult>>;

/// Map of keys currently being resolved.
///
/// Each resolution runs as its own task, so it settles and leaves the map even
/// when every caller waiting on it has given up (e.g. on a request deadline).
///
/// `epoch` counts cache evictions. A flight remembers the epoch it started in
/// and only stores its record if no eviction happened since; [`InFlight::clear`]
/// also forgets running flights so callers arriving after an eviction start a
/// fresh resolution instead of joining a stale one.
#[derive(Default)]
pub(crate) struct InFlight {
    state: Mutex<State>,
}

#[derive(Default)]
pub(crate) struct State {
    epoch: u64,
    flights: HashMap<CacheKey, (u64, Flight)>,
}

impl State {
    pub(crate) const fn epoch(&self) -> u64 {
        self.epoch
    }

    pub(crate) fn get(&self, key: &CacheKey) -> Option<Flight> {
        self.flights.get(key).map(|(_, flight)| flight.clone())
    }

    pub(crate) fn insert(&mut self, key: CacheKey, flight: Flight) {
        self.flights.insert(key, (self.epoch, flight));
    }
}

impl InFlight {
    pub(crate) async fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().await
    }

    /// Settle the flight for `key` started in `epoch`.
    ///
    /// A successful record is written to `store` unless the cache was evicted
    /// after the flight began. The map entry is removed only if it still
    /// belongs to this flight.
    pub(crate) async fn finish(
        &self,
        key: CacheKey,
        epoch: u64,
        out: &FlightResult,
        store: &dyn CacheStore,
    ) {
        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            return;
        }
        if let Ok(rec) = out {
            store.put(key, Arc::clone(rec)).await;
        }
        state.flights.remove(&key);
    }

    /// Forget every running flight and start a new epoch.
    pub(crate) async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.epoch += 1;
        state.flights.clear();
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.state.lock().await.flights.len()
    }
}
