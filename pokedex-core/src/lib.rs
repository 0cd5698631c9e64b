//! pokedex-core
//!
//! Traits and helpers shared across the pokedex workspace.
//!
//! - `upstream`: the `Upstream` trait every data source implements.
//! - `store`: the `CacheStore` trait owning cached detail records.
//! - `middleware`: the `Middleware` trait used to wrap upstreams.
//! - `wire`: typed projections of the upstream's JSON documents.
//! - `reference`: id extraction and URL building.
//!
//! The records, identifiers, configuration and error types from
//! `pokedex-types` are re-exported at the crate root.
#![warn(missing_docs)]

/// Middleware trait implemented by upstream wrappers.
pub mod middleware;
/// Id extraction from reference URLs and endpoint URL builders.
pub mod reference;
/// Cache store trait.
pub mod store;
/// Upstream data source trait.
pub mod upstream;
pub mod wire;

pub use middleware::Middleware;
pub use reference::{detail_url, entity_id_from_reference, listing_url, parse_base_url};
pub use store::CacheStore;
pub use upstream::Upstream;
pub use pokedex_types::*;
