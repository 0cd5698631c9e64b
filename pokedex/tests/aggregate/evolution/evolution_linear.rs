use pokedex::{Language, PokedexError};

use crate::helpers::*;

#[tokio::test]
async fn linear_chain_yields_one_record_per_generation() {
    let mock = mock();
    let generations = dex(&mock).evolution(&chain_url(1), Language::Es).await.unwrap();

    assert_eq!(generations.len(), 3);
    assert_eq!(names(&generations[0]), ["bulbasaur"]);
    assert_eq!(names(&generations[1]), ["ivysaur"]);
    assert_eq!(names(&generations[2]), ["venusaur"]);
    assert_eq!(generations[2][0].type_names, ["Planta", "Veneno"]);
    assert_eq!(generations[0][0].weight_kg, Some(6.9));
}

#[tokio::test]
async fn single_link_chain_has_only_the_root() {
    let mock = mock();
    let generations = dex(&mock).evolution(&chain_url(66), Language::En).await.unwrap();
    assert_eq!(generations.len(), 1);
    assert_eq!(names(&generations[0]), ["ditto"]);
}

#[tokio::test]
async fn chain_members_are_cached() {
    let mock = mock();
    let dex = dex(&mock);
    dex.evolution(&chain_url(1), Language::Es).await.unwrap();

    mock.reset_calls();
    dex.get_detail(id(2), Language::Es).await.unwrap();
    dex.evolution(&chain_url(1), Language::Es).await.unwrap();
    // only the chain document itself is refetched
    assert_eq!(mock.total_calls(), 1);
    assert_eq!(mock.calls_to(&chain_url(1)), 1);
}

#[tokio::test]
async fn node_failure_aborts_the_chain() {
    let mock = mock();
    let url = detail(3);
    mock.fail(url.clone(), PokedexError::not_found(&url));

    let err = dex(&mock).evolution(&chain_url(1), Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::UpstreamNotFound { .. }));
}

#[tokio::test]
async fn unknown_chain_is_not_found() {
    let mock = mock();
    let err = dex(&mock)
        .evolution(&chain_url(9999), Language::Es)
        .await
        .unwrap_err();
    assert!(matches!(err, PokedexError::UpstreamNotFound { .. }));
}
