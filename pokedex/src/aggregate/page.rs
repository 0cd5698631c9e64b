use futures::future::try_join_all;
use pokedex_core::wire::{ListingDoc, decode};
use pokedex_core::{Language, PageResult, PokedexError, entity_id_from_reference, listing_url};

use crate::Pokedex;

impl Pokedex {
    /// Resolve one page of the upstream listing.
    ///
    /// `total_count` is the upstream's `count`, reported as-is. Entries that
    /// are null or lack a URL are dropped; the rest are resolved concurrently
    /// and returned in listing order.
    ///
    /// # Errors
    /// `InvalidArg` for a zero `page_size` or an offset that overflows;
    /// upstream errors from the listing or any item; `InvalidReference` for an
    /// entry URL without a numeric id. Fails with `RequestTimeout("page")`
    /// past the configured request deadline.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pokedex::page", skip(self))
    )]
    pub async fn page(
        &self,
        page: u64,
        page_size: u32,
        language: Language,
    ) -> Result<PageResult, PokedexError> {
        if page_size == 0 {
            return Err(PokedexError::InvalidArg(
                "page_size must be greater than zero".to_string(),
            ));
        }
        let offset = page.checked_mul(u64::from(page_size)).ok_or_else(|| {
            PokedexError::InvalidArg(format!("page offset overflows: {page} * {page_size}"))
        })?;
        self.with_request_deadline("page", self.resolve_page(offset, page_size, language))
            .await
    }

    async fn resolve_page(
        &self,
        offset: u64,
        limit: u32,
        language: Language,
    ) -> Result<PageResult, PokedexError> {
        let url = listing_url(&self.base_url, offset, limit);
        let listing: ListingDoc = decode(&url, self.upstream.fetch(&url).await?)?;

        let listed = listing.results.len();
        let references: Vec<String> = listing
            .results
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.usable_url().map(str::to_owned))
            .collect();
        let filtered = listed - references.len();
        if filtered > 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(filtered, offset, limit, "dropped listing entries without a url");
        }
        if references.is_empty() {
            return Ok(PageResult {
                total_count: listing.count,
                items: Vec::new(),
            });
        }

        let ids = references
            .iter()
            .map(|r| entity_id_from_reference(r))
            .collect::<Result<Vec<_>, _>>()?;
        let items = try_join_all(ids.into_iter().map(|id| self.basic(id, language))).await?;
        Ok(PageResult {
            total_count: listing.count,
            items,
        })
    }
}
