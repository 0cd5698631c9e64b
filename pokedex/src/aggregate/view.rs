use pokedex_core::{DetailView, EntityId, Language, PokedexError};

use crate::Pokedex;

impl Pokedex {
    /// A record together with the evolution chain of its species.
    ///
    /// # Errors
    /// Errors from [`Pokedex::get_detail`] or [`Pokedex::evolution`]. Fails
    /// with `RequestTimeout("detail")` past the configured request deadline.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pokedex::detail", skip(self))
    )]
    pub async fn detail(&self, id: EntityId, language: Language) -> Result<DetailView, PokedexError> {
        self.with_request_deadline("detail", async {
            let data = self.get_detail(id, language).await?;
            let evolution = self
                .resolve_evolution(&data.species.evolution_chain_url, language)
                .await?;
            Ok(DetailView { data, evolution })
        })
        .await
    }
}
