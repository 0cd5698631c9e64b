//! pokedex-mock
//!
//! Deterministic [`Upstream`] for CI-safe tests and demos. Documents are
//! served from an in-memory map keyed by exact URL; per-URL behaviors can
//! force failures or stalls, and every call is counted.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use pokedex_core::{PokedexError, Upstream};
use serde_json::Value;

pub mod fixtures;

/// Instruction for how a URL should behave when fetched.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Fail every call with the provided error.
    Fail(PokedexError),
    /// Fail the next `n` calls with the provided error, then serve normally.
    FailTimes(usize, PokedexError),
    /// Never answer (simulate a stalled connection).
    Hang,
}

#[derive(Default)]
struct State {
    rules: HashMap<String, MockBehavior>,
    calls: HashMap<String, usize>,
}

/// Mock upstream backed by a document map.
pub struct MockUpstream {
    documents: HashMap<String, Value>,
    latency: Option<Duration>,
    state: Mutex<State>,
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUpstream {
    /// An upstream preloaded with every fixture document.
    #[must_use]
    pub fn new() -> Self {
        Self::empty().with_documents(fixtures::all())
    }

    /// An upstream that answers `UpstreamNotFound` for everything.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            documents: HashMap::new(),
            latency: None,
            state: Mutex::new(State::default()),
        }
    }

    /// Serve `doc` at `url`, replacing any previous document.
    #[must_use]
    pub fn with_document(mut self, url: impl Into<String>, doc: Value) -> Self {
        self.documents.insert(url.into(), doc);
        self
    }

    /// Serve every `(url, doc)` pair.
    #[must_use]
    pub fn with_documents(mut self, docs: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.documents.extend(docs);
        self
    }

    /// Delay every answer by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a behavior for `url`, replacing any previous one.
    pub fn set_behavior(&self, url: impl Into<String>, behavior: MockBehavior) {
        self.state().rules.insert(url.into(), behavior);
    }

    /// Fail every call to `url` with `err`.
    pub fn fail(&self, url: impl Into<String>, err: PokedexError) {
        self.set_behavior(url, MockBehavior::Fail(err));
    }

    /// Remove any behavior installed for `url`.
    pub fn clear_behavior(&self, url: &str) {
        self.state().rules.remove(url);
    }

    /// Number of fetches issued for `url`.
    #[must_use]
    pub fn calls_to(&self, url: &str) -> usize {
        self.state().calls.get(url).copied().unwrap_or(0)
    }

    /// Number of fetches issued for any URL.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.state().calls.values().sum()
    }

    /// Reset every call counter.
    pub fn reset_calls(&self) {
        self.state().calls.clear();
    }

    /// Record a call and decide how to answer it.
    fn admit(&self, url: &str) -> Option<MockBehavior> {
        let mut state = self.state();
        *state.calls.entry(url.to_string()).or_insert(0) += 1;
        match state.rules.get_mut(url) {
            Some(MockBehavior::FailTimes(remaining, err)) => {
                if *remaining == 0 {
                    None
                } else {
                    *remaining -= 1;
                    Some(MockBehavior::Fail(err.clone()))
                }
            }
            Some(other) => Some(other.clone()),
            None => None,
        }
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    fn name(&self) -> &'static str {
        "pokedex-mock"
    }

    async fn fetch(&self, url: &str) -> Result<Value, PokedexError> {
        let behavior = self.admit(url);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match behavior {
            Some(MockBehavior::Fail(err) | MockBehavior::FailTimes(_, err)) => Err(err),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => self
                .documents
                .get(url)
                .cloned()
                .ok_or_else(|| PokedexError::not_found(url)),
        }
    }
}
