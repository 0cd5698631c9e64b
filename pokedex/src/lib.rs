//! Pokedex resolves creature records from a hyperlink-driven REST upstream.
//!
//! Overview
//! - `get_detail(id, language)` fetches the primary record, resolves its
//!   localized types, abilities and species concurrently, and caches the
//!   composite under `(id, language)`. Concurrent callers for the same key
//!   share one resolution.
//! - `evolution(chain_url, language)` walks an evolution chain into ordered
//!   generations, resolving every member through the cache.
//! - `page(page, size, language)` resolves one listing page in listing order.
//! - `detail(id, language)` combines a record with its evolution chain.
//! - `evict_all()` drops every cached record.
//!
//! Localized names degrade to [`UNKNOWN`] instead of failing; a species
//! without flavor text in the requested language yields `None`.
//!
//! Branching chains: when a link evolves into several species, all of them
//! form one generation, and only the first branch is expanded further.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pokedex::{EntityId, Language, Pokedex};
//! use pokedex_http::HttpUpstream;
//!
//! let upstream = HttpUpstream::new().build()?;
//! let dex = Pokedex::builder().with_upstream(upstream).build()?;
//!
//! let bulbasaur = dex.get_detail(EntityId::new(1)?, Language::Es).await?;
//! let chain = dex
//!     .evolution(&bulbasaur.species.evolution_chain_url, Language::Es)
//!     .await?;
//! assert_eq!(chain.len(), 3);
//! ```
#![warn(missing_docs)]

mod aggregate;
pub(crate) mod core;
mod inflight;

pub use core::{Pokedex, PokedexBuilder};

pub use pokedex_core::wire::LocalizedField;
pub use pokedex_core::{
    BasicRecord, CacheKey, CacheStore, CachedDetailRecord, DetailView, EntityId,
    EvolutionGenerations, Language, Middleware, PageResult, PokedexConfig, PokedexError,
    RetryConfig, SpeciesInfo, UNKNOWN, Upstream,
};
pub use pokedex_middleware::{MemoryStore, RetryMiddleware, UpstreamBuilder};
