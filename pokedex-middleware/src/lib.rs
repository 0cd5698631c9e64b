//! pokedex-middleware
//!
//! Wrappers composed around a raw [`Upstream`](pokedex_core::Upstream) and the
//! default in-memory [`CacheStore`](pokedex_core::CacheStore).

mod builder;
mod retry;
mod store;

pub use crate::builder::UpstreamBuilder;
pub use crate::retry::{RetryMiddleware, RetryingUpstream, jitter_wait};
pub use crate::store::MemoryStore;
