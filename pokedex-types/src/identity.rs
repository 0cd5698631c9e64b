//! Identifiers: entity ids, language tags, and the composite cache key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PokedexError;

/// Positive numeric id of an upstream entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EntityId(u32);

impl EntityId {
    /// Build an id from a raw integer.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `raw` is zero.
    pub fn new(raw: u32) -> Result<Self, PokedexError> {
        if raw == 0 {
            return Err(PokedexError::InvalidArg("entity id must be positive".into()));
        }
        Ok(Self(raw))
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for EntityId {
    type Error = PokedexError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language tags understood by the upstream's localized collections.
///
/// Matching against upstream entries is exact and case-sensitive on
/// [`Language::as_str`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub enum Language {
    /// Spanish.
    #[default]
    Es,
    /// English.
    En,
    /// French.
    Fr,
    /// German.
    De,
    /// Italian.
    It,
    /// Japanese (kanji).
    Ja,
    /// Japanese (katakana).
    JaHrkt,
    /// Japanese romanization.
    Roomaji,
    /// Korean.
    Ko,
    /// Simplified Chinese.
    ZhHans,
    /// Traditional Chinese.
    ZhHant,
    /// Czech.
    Cs,
    /// Brazilian Portuguese.
    PtBr,
}

impl Language {
    /// All supported tags in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Es,
        Self::En,
        Self::Fr,
        Self::De,
        Self::It,
        Self::Ja,
        Self::JaHrkt,
        Self::Roomaji,
        Self::Ko,
        Self::ZhHans,
        Self::ZhHant,
        Self::Cs,
        Self::PtBr,
    ];

    /// The tag as it appears in upstream `language.name` fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Ja => "ja",
            Self::JaHrkt => "ja-Hrkt",
            Self::Roomaji => "roomaji",
            Self::Ko => "ko",
            Self::ZhHans => "zh-Hans",
            Self::ZhHant => "zh-Hant",
            Self::Cs => "cs",
            Self::PtBr => "pt-BR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| PokedexError::InvalidArg(format!("unsupported language tag: {s}")))
    }
}

impl TryFrom<String> for Language {
    type Error = PokedexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Language> for String {
    fn from(l: Language) -> Self {
        l.as_str().to_string()
    }
}

/// Composite key under which detail records are cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// Entity id.
    pub id: EntityId,
    /// Language the localized fields were resolved in.
    pub language: Language,
}

impl CacheKey {
    /// Build a key from its parts.
    #[must_use]
    pub const fn new(id: EntityId, language: Language) -> Self {
        Self { id, language }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.language)
    }
}
