//! Typed projections of the upstream's JSON documents.
//!
//! Each resource kind the engine reads gets its own `Deserialize` struct
//! carrying only the fields the engine consumes. Optional upstream fields are
//! modelled as `Option` or defaulted collections so partial documents still
//! decode; missing required fields surface as `UpstreamMalformed`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Language, PokedexError};

/// Decode a raw document fetched from `url` into a typed projection.
///
/// # Errors
/// Returns `UpstreamMalformed` when the document does not match `T`.
pub fn decode<T: DeserializeOwned>(url: &str, doc: Value) -> Result<T, PokedexError> {
    serde_json::from_value(doc).map_err(|e| PokedexError::malformed(url, e.to_string()))
}

/// `{ "name": ..., "url": ... }` reference as embedded everywhere upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedRef {
    /// Resource name.
    #[serde(default)]
    pub name: Option<String>,
    /// Absolute resource URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl NamedRef {
    /// The URL when present and non-empty.
    #[must_use]
    pub fn usable_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Primary creature record at `<base>/<id>`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatureDoc {
    /// Upstream name.
    pub name: String,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: Option<u32>,
    /// Height in decimeters.
    #[serde(default)]
    pub height: Option<u32>,
    /// Image links.
    #[serde(default)]
    pub sprites: Option<Sprites>,
    /// Type slots in upstream order.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Ability slots in upstream order.
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    /// Species reference.
    #[serde(default)]
    pub species: Option<NamedRef>,
}

impl CreatureDoc {
    /// `sprites.front_default`, when non-empty.
    #[must_use]
    pub fn front_default(&self) -> Option<&str> {
        self.sprites
            .as_ref()
            .and_then(|s| s.front_default.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// `sprites.other.dream_world.front_default`, when non-empty.
    #[must_use]
    pub fn dream_world(&self) -> Option<&str> {
        self.sprites
            .as_ref()
            .and_then(|s| s.other.as_ref())
            .and_then(|o| o.dream_world.as_ref())
            .and_then(|d| d.front_default.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// `sprites` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    /// Small front image.
    #[serde(default)]
    pub front_default: Option<String>,
    /// Alternative artwork sets.
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// `sprites.other` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    /// Vector artwork set.
    #[serde(default)]
    pub dream_world: Option<ArtworkSet>,
}

/// An artwork set with a front image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSet {
    /// Front image URL.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Entry of the `types` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeSlot {
    /// Type reference.
    #[serde(rename = "type", default)]
    pub kind: Option<NamedRef>,
}

/// Entry of the `abilities` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbilitySlot {
    /// Ability reference.
    #[serde(default)]
    pub ability: Option<NamedRef>,
}

/// Localized collections read by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizedField {
    /// `names[].name`, carried by type resources.
    Names,
    /// `flavor_text_entries[].flavor_text`, carried by abilities and species.
    FlavorText,
}

impl LocalizedField {
    /// Name of the collection field.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::FlavorText => "flavor_text_entries",
        }
    }

    /// Name of the value field inside each entry.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Names => "name",
            Self::FlavorText => "flavor_text",
        }
    }
}

#[derive(Debug, Deserialize)]
struct NamesDoc {
    #[serde(default)]
    names: Option<Vec<Option<NameEntry>>>,
}

#[derive(Debug, Deserialize)]
struct NameEntry {
    #[serde(default)]
    language: Option<NamedRef>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlavorDoc {
    #[serde(default)]
    flavor_text_entries: Option<Vec<Option<FlavorEntry>>>,
}

#[derive(Debug, Clone, Deserialize)]
struct FlavorEntry {
    #[serde(default)]
    language: Option<NamedRef>,
    #[serde(default)]
    flavor_text: Option<String>,
}

/// One entry of a localized collection, flattened to `(language, value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEntry {
    /// `language.name`, if present.
    pub language: Option<String>,
    /// The value field, if present.
    pub value: Option<String>,
}

impl LocalizedEntry {
    fn is_language(&self, language: Language) -> bool {
        self.language.as_deref() == Some(language.as_str())
    }
}

/// Decoded localized collection, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedEntries(pub Vec<LocalizedEntry>);

impl LocalizedEntries {
    /// Decode the collection selected by `field` from a raw document.
    ///
    /// An absent collection decodes as empty; null entries are skipped.
    ///
    /// # Errors
    /// Returns `UpstreamMalformed` when the collection has the wrong shape.
    pub fn decode(url: &str, doc: Value, field: LocalizedField) -> Result<Self, PokedexError> {
        let entries = match field {
            LocalizedField::Names => decode::<NamesDoc>(url, doc)?
                .names
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .map(|e| LocalizedEntry {
                    language: e.language.and_then(|l| l.name),
                    value: e.name,
                })
                .collect(),
            LocalizedField::FlavorText => decode::<FlavorDoc>(url, doc)?
                .flavor_text_entries
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .map(FlavorEntry::into_entry)
                .collect(),
        };
        Ok(Self(entries))
    }

    /// First non-empty value whose language matches.
    ///
    /// Matching entries with an absent or empty value are skipped in favour of
    /// a later match.
    #[must_use]
    pub fn first_non_empty(&self, language: Language) -> Option<&str> {
        self.0
            .iter()
            .filter(|e| e.is_language(language))
            .filter_map(|e| e.value.as_deref())
            .find(|v| !v.is_empty())
    }

    /// Value of the earliest entry whose language matches, as-is.
    #[must_use]
    pub fn first_match(&self, language: Language) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.is_language(language))
            .and_then(|e| e.value.as_deref())
    }
}

impl FlavorEntry {
    fn into_entry(self) -> LocalizedEntry {
        LocalizedEntry {
            language: self.language.and_then(|l| l.name),
            value: self.flavor_text,
        }
    }
}

/// Species resource.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesDoc {
    /// Reference to the evolution chain.
    #[serde(default)]
    pub evolution_chain: Option<NamedRef>,
    #[serde(default)]
    flavor_text_entries: Option<Vec<Option<FlavorEntry>>>,
}

impl SpeciesDoc {
    /// The species' flavor text entries in upstream order.
    #[must_use]
    pub fn flavor_entries(&self) -> LocalizedEntries {
        LocalizedEntries(
            self.flavor_text_entries
                .iter()
                .flatten()
                .flatten()
                .cloned()
                .map(FlavorEntry::into_entry)
                .collect(),
        )
    }
}

/// Evolution chain resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainDoc {
    /// Root link.
    pub chain: ChainLink,
}

/// A link of the evolution chain.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    /// Species reference for this link.
    #[serde(default)]
    pub species: Option<NamedRef>,
    /// Direct descendants in upstream order.
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Evolution tree reduced to species URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    /// Species reference URL of this node.
    pub species_url: String,
    /// Children in upstream order.
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Build the tree from the root link of the chain at `chain_url`.
    ///
    /// # Errors
    /// Returns `InvalidReference` naming `chain_url` and the offending link
    /// (e.g. `chain.evolves_to[1]`) when a link has no species URL.
    pub fn from_link(chain_url: &str, link: ChainLink) -> Result<Self, PokedexError> {
        Self::from_link_at(chain_url, link, "chain")
    }

    fn from_link_at(chain_url: &str, link: ChainLink, path: &str) -> Result<Self, PokedexError> {
        let species_url = link
            .species
            .as_ref()
            .and_then(NamedRef::usable_url)
            .map(str::to_owned)
            .ok_or_else(|| {
                PokedexError::invalid_reference(chain_url, format!("{path} has no species url"))
            })?;
        let children = link
            .evolves_to
            .into_iter()
            .enumerate()
            .map(|(i, child)| {
                Self::from_link_at(chain_url, child, &format!("{path}.evolves_to[{i}]"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            species_url,
            children,
        })
    }
}

/// Listing page at `<base>?offset=&limit=`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingDoc {
    /// Total number of records upstream.
    pub count: u64,
    /// Page entries; entries may be null.
    #[serde(default)]
    pub results: Vec<Option<NamedRef>>,
}
