use pokedex_core::wire::{LocalizedEntries, LocalizedField, NamedRef};
use pokedex_core::{Language, UNKNOWN};

use crate::Pokedex;

impl Pokedex {
    /// Resolve the first localized value of `field` at `url` for `language`.
    ///
    /// Never fails: an unreachable resource, an absent collection, or a
    /// language with no non-empty entry all yield [`UNKNOWN`]. When several
    /// entries match, the earliest non-empty one wins.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pokedex::localized", skip(self), level = "debug")
    )]
    pub async fn localized(&self, url: &str, language: Language, field: LocalizedField) -> String {
        let entries = match self.upstream.fetch(url).await {
            Ok(doc) => LocalizedEntries::decode(url, doc, field),
            Err(e) => Err(e),
        };
        match entries {
            Ok(entries) => {
                if let Some(value) = entries.first_non_empty(language) {
                    return value.to_string();
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(collection = field.collection(), "no entry for language");
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, "localized lookup degraded");
            }
        }
        UNKNOWN.to_string()
    }

    /// Resolve a type or ability slot; slots without a reference are unknown.
    pub(crate) async fn localized_slot(
        &self,
        reference: Option<&NamedRef>,
        language: Language,
        field: LocalizedField,
    ) -> String {
        match reference.and_then(NamedRef::usable_url) {
            Some(url) => self.localized(url, language, field).await,
            None => UNKNOWN.to_string(),
        }
    }
}
