use futures::future::try_join_all;
use pokedex_core::wire::{ChainDoc, EvolutionNode, decode};
use pokedex_core::{
    BasicRecord, EvolutionGenerations, Language, PokedexError, entity_id_from_reference,
};

use crate::Pokedex;

impl Pokedex {
    /// Expand the evolution chain at `chain_url` into ordered generations.
    ///
    /// Generation 0 holds the root alone. Each following generation holds the
    /// direct descendants of the previous link in upstream order, resolved
    /// concurrently. Past a fork, only the first descendant's line is
    /// followed; descendants of its siblings are not included.
    ///
    /// # Errors
    /// Any upstream or reference error aborts the whole chain. Fails with
    /// `RequestTimeout("evolution")` past the configured request deadline.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "pokedex::evolution", skip(self))
    )]
    pub async fn evolution(
        &self,
        chain_url: &str,
        language: Language,
    ) -> Result<EvolutionGenerations, PokedexError> {
        self.with_request_deadline("evolution", self.resolve_evolution(chain_url, language))
            .await
    }

    pub(crate) async fn resolve_evolution(
        &self,
        chain_url: &str,
        language: Language,
    ) -> Result<EvolutionGenerations, PokedexError> {
        let doc: ChainDoc = decode(chain_url, self.upstream.fetch(chain_url).await?)?;
        let root = EvolutionNode::from_link(chain_url, doc.chain)?;

        let mut generations = vec![vec![self.species_member(&root, language).await?]];
        let mut frontier = root.children.as_slice();
        while let siblings @ [first, ..] = frontier {
            let members = try_join_all(
                siblings
                    .iter()
                    .map(|node| self.species_member(node, language)),
            )
            .await?;
            generations.push(members);
            frontier = first.children.as_slice();
        }
        Ok(generations)
    }

    /// Species ids double as record ids upstream.
    async fn species_member(
        &self,
        node: &EvolutionNode,
        language: Language,
    ) -> Result<BasicRecord, PokedexError> {
        let id = entity_id_from_reference(&node.species_url)?;
        self.basic(id, language).await
    }
}
