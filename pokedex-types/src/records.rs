//! Normalized records produced by the aggregation engine.

use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Sentinel used when a localized name or description cannot be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Compact view of a creature, used in listings and evolution generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicRecord {
    /// Upstream entity id.
    pub id: EntityId,
    /// Upstream name (not localized).
    pub name: String,
    /// Small image suited to list rendering.
    pub image_list: String,
    /// Localized type names, in the upstream's slot order.
    pub type_names: Vec<String>,
    /// Localized ability descriptions, in the upstream's slot order.
    pub ability_descriptions: Vec<String>,
    /// Weight in kilograms; `None` when the upstream omits it.
    pub weight_kg: Option<f64>,
}

/// Species-level data attached to a detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    /// Absolute URL of the species' evolution chain resource.
    pub evolution_chain_url: String,
    /// Localized flavor text; `None` when the language has no entry.
    pub flavor_text: Option<String>,
}

/// Full record stored in the cache under `(id, language)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedDetailRecord {
    /// Fields shared with the compact view.
    #[serde(flatten)]
    pub basic: BasicRecord,
    /// Height in meters; `None` when the upstream omits it.
    pub height_m: Option<f64>,
    /// Large image suited to a detail page.
    pub image_detail: String,
    /// Species data.
    pub species: SpeciesInfo,
}

impl CachedDetailRecord {
    /// Project down to the compact view.
    #[must_use]
    pub fn basic(&self) -> BasicRecord {
        self.basic.clone()
    }
}

impl From<CachedDetailRecord> for BasicRecord {
    fn from(r: CachedDetailRecord) -> Self {
        r.basic
    }
}

impl From<&CachedDetailRecord> for BasicRecord {
    fn from(r: &CachedDetailRecord) -> Self {
        r.basic.clone()
    }
}

/// Evolution chain flattened into generations; index 0 is the root.
pub type EvolutionGenerations = Vec<Vec<BasicRecord>>;

/// One page of the upstream listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// Total number of records reported by the upstream, verbatim.
    pub total_count: u64,
    /// Resolved records of this page, in listing order.
    pub items: Vec<BasicRecord>,
}

/// A detail record together with the evolution chain of its species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    /// The cached detail record.
    pub data: CachedDetailRecord,
    /// Generations of the species' evolution chain.
    pub evolution: EvolutionGenerations,
}

/// Convert an upstream tenths value (hectograms, decimeters) to the documented unit.
#[must_use]
pub fn from_tenths(raw: u32) -> f64 {
    f64::from(raw) / 10.0
}
