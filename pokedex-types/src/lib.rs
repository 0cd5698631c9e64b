//! Pokedex-specific records, identifiers and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod identity;
mod records;

pub use config::{DEFAULT_BASE_URL, DEFAULT_IMAGE_NOT_AVAILABLE_URL, PokedexConfig, RetryConfig};
pub use error::PokedexError;
pub use identity::{CacheKey, EntityId, Language};
pub use records::{
    BasicRecord, CachedDetailRecord, DetailView, EvolutionGenerations, PageResult, SpeciesInfo,
    UNKNOWN, from_tenths,
};
