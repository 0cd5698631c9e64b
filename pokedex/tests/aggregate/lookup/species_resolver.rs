use std::sync::Arc;

use pokedex::{Language, PokedexError};
use pokedex_mock::MockUpstream;
use serde_json::json;

use crate::helpers::*;

#[tokio::test]
async fn extracts_chain_and_flavor_text() {
    let mock = mock();
    let info = dex(&mock).species(&species_url(133), Language::En).await.unwrap();
    assert_eq!(info.evolution_chain_url, chain_url(67));
    assert_eq!(info.flavor_text.as_deref(), Some("Its genetic code is irregular."));
}

#[tokio::test]
async fn missing_language_yields_none_not_unknown() {
    let mock = mock();
    let info = dex(&mock).species(&species_url(132), Language::Es).await.unwrap();
    assert_eq!(info.evolution_chain_url, chain_url(66));
    assert_eq!(info.flavor_text, None);
}

#[tokio::test]
async fn species_without_chain_is_malformed() {
    let url = "https://pokeapi.co/api/v2/pokemon-species/9000/";
    let mock = Arc::new(MockUpstream::new().with_document(
        url,
        json!({ "flavor_text_entries": [], "evolution_chain": null }),
    ));
    let err = dex(&mock).species(url, Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::UpstreamMalformed { .. }));
}

#[tokio::test]
async fn fetch_errors_propagate() {
    let mock = mock();
    let err = dex(&mock)
        .species("https://pokeapi.co/api/v2/pokemon-species/9999/", Language::Es)
        .await
        .unwrap_err();
    assert!(matches!(err, PokedexError::UpstreamNotFound { .. }));
}
