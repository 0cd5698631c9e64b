use pokedex_core::wire::{NamedRef, SpeciesDoc, decode};
use pokedex_core::{Language, PokedexError, SpeciesInfo};

use crate::Pokedex;

impl Pokedex {
    /// Resolve a species' evolution chain URL and localized flavor text.
    ///
    /// Unlike [`Pokedex::localized`], fetch and decode failures propagate, and
    /// a missing language yields `flavor_text: None` rather than a sentinel.
    ///
    /// # Errors
    /// Upstream errors from the fetch; `UpstreamMalformed` when the species
    /// carries no `evolution_chain.url`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pokedex::species", skip(self), level = "debug")
    )]
    pub async fn species(
        &self,
        species_url: &str,
        language: Language,
    ) -> Result<SpeciesInfo, PokedexError> {
        let doc: SpeciesDoc = decode(species_url, self.upstream.fetch(species_url).await?)?;
        let evolution_chain_url = doc
            .evolution_chain
            .as_ref()
            .and_then(NamedRef::usable_url)
            .map(str::to_owned)
            .ok_or_else(|| {
                PokedexError::malformed(species_url, "species without evolution_chain.url")
            })?;
        let flavor_text = doc
            .flavor_entries()
            .first_match(language)
            .map(str::to_owned);
        Ok(SpeciesInfo {
            evolution_chain_url,
            flavor_text,
        })
    }
}
