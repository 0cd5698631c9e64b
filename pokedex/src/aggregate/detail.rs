use std::sync::Arc;

use futures::FutureExt;
use futures::future::join_all;
use pokedex_core::wire::{CreatureDoc, LocalizedField, NamedRef, decode};
use pokedex_core::{
    BasicRecord, CacheKey, CachedDetailRecord, EntityId, Language, PokedexError, detail_url,
    from_tenths,
};

use crate::Pokedex;
use crate::inflight::FlightResult;

impl Pokedex {
    /// Resolve the full record for `id` in `language`, reading through the cache.
    ///
    /// A cached record is returned without any upstream traffic. On a miss the
    /// primary record is fetched, types, abilities and species are resolved
    /// concurrently, and the result is stored. Concurrent callers for the same
    /// key share a single resolution; failures are not cached.
    ///
    /// # Errors
    /// Upstream errors from the primary or species fetch; `InvalidReference`
    /// when the record carries no species reference.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pokedex::get_detail", skip_all, fields(id = %id, language = %language))
    )]
    pub async fn get_detail(
        &self,
        id: EntityId,
        language: Language,
    ) -> Result<CachedDetailRecord, PokedexError> {
        let rec = self.detail_shared(CacheKey::new(id, language)).await?;
        Ok(CachedDetailRecord::clone(&rec))
    }

    /// Drop every cached record. Idempotent.
    ///
    /// Resolutions still running are detached: they neither populate the
    /// cache nor serve callers arriving after the eviction.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pokedex::evict_all", skip(self))
    )]
    pub async fn evict_all(&self) {
        self.inflight.clear().await;
        self.store.evict_all().await;
        #[cfg(feature = "tracing")]
        tracing::info!(store = self.store.name(), "cache evicted");
    }

    pub(crate) async fn basic(
        &self,
        id: EntityId,
        language: Language,
    ) -> Result<BasicRecord, PokedexError> {
        let rec = self.detail_shared(CacheKey::new(id, language)).await?;
        Ok(rec.basic())
    }

    pub(crate) async fn detail_shared(&self, key: CacheKey) -> FlightResult {
        if let Some(hit) = self.store.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(%key, "cache hit");
            return Ok(hit);
        }

        let flight = {
            let mut state = self.inflight.lock().await;
            if let Some(flight) = state.get(&key) {
                #[cfg(feature = "tracing")]
                tracing::debug!(%key, "joining in-flight resolution");
                flight
            } else {
                // a flight may have settled between the miss and the lock
                if let Some(hit) = self.store.get(&key).await {
                    return Ok(hit);
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(%key, "cache miss");
                let this = self.clone();
                let epoch = state.epoch();
                let resolution = async move {
                    let out = this.resolve_detail(key).await.map(Arc::new);
                    this.inflight.finish(key, epoch, &out, this.store.as_ref()).await;
                    out
                };
                #[cfg(feature = "tracing")]
                let resolution =
                    tracing::Instrument::instrument(resolution, tracing::Span::current());
                let task = tokio::spawn(resolution);
                let flight = async move {
                    match task.await {
                        Ok(out) => out,
                        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
                        Err(_) => Err(PokedexError::Other(format!(
                            "resolution of {key} was cancelled"
                        ))),
                    }
                }
                .boxed()
                .shared();
                state.insert(key, flight.clone());
                flight
            }
        };
        flight.await
    }

    async fn resolve_detail(&self, key: CacheKey) -> Result<CachedDetailRecord, PokedexError> {
        let url = detail_url(&self.base_url, key.id);
        #[cfg(feature = "tracing")]
        tracing::info!(%key, url = %url, "resolving record from upstream");
        let doc: CreatureDoc = decode(&url, self.upstream.fetch(&url).await?)?;

        let species_url = doc
            .species
            .as_ref()
            .and_then(NamedRef::usable_url)
            .ok_or_else(|| PokedexError::invalid_reference(&url, "record without species url"))?;

        let image_list = doc
            .front_default()
            .unwrap_or(self.cfg.image_not_available_url.as_str())
            .to_string();
        let image_detail = doc.dream_world().unwrap_or(image_list.as_str()).to_string();

        let language = key.language;
        let types = doc
            .types
            .iter()
            .map(|slot| self.localized_slot(slot.kind.as_ref(), language, LocalizedField::Names));
        let abilities = doc.abilities.iter().map(|slot| {
            self.localized_slot(slot.ability.as_ref(), language, LocalizedField::FlavorText)
        });
        let (type_names, ability_descriptions, species) = tokio::join!(
            join_all(types),
            join_all(abilities),
            self.species(species_url, language),
        );

        Ok(CachedDetailRecord {
            basic: BasicRecord {
                id: key.id,
                name: doc.name,
                image_list,
                type_names,
                ability_descriptions,
                weight_kg: doc.weight.map(from_tenths),
            },
            height_m: doc.height.map(from_tenths),
            image_detail,
            species: species?,
        })
    }
}
