use std::sync::Arc;

use pokedex::{Language, PokedexError};
use pokedex_mock::MockUpstream;
use serde_json::json;

use crate::helpers::*;

#[tokio::test]
async fn leaf_siblings_form_one_generation_in_upstream_order() {
    let mock = mock();
    let generations = dex(&mock).evolution(&chain_url(67), Language::Es).await.unwrap();

    assert_eq!(generations.len(), 2);
    assert_eq!(names(&generations[0]), ["eevee"]);
    assert_eq!(names(&generations[1]), ["vaporeon", "jolteon", "flareon"]);
    assert_eq!(generations[1][2].type_names, ["Fuego"]);
}

#[tokio::test]
async fn only_the_first_branch_is_expanded_past_a_fork() {
    let mock = mock();
    let generations = dex(&mock).evolution(&chain_url(135), Language::En).await.unwrap();

    assert_eq!(generations.len(), 3);
    assert_eq!(names(&generations[0]), ["wurmple"]);
    assert_eq!(names(&generations[1]), ["silcoon", "cascoon"]);
    assert_eq!(names(&generations[2]), ["beautifly"]);
    // the second branch's descendant is never resolved
    assert_eq!(mock.calls_to(&detail(269)), 0);
}

#[tokio::test]
async fn fork_after_a_linear_link_keeps_walking() {
    // 1 -> 2 -> [3, 132] where 3 -> 133
    let chain = json!({
        "chain": {
            "species": { "url": species_url(1) },
            "evolves_to": [{
                "species": { "url": species_url(2) },
                "evolves_to": [
                    { "species": { "url": species_url(3) }, "evolves_to": [
                        { "species": { "url": species_url(133) }, "evolves_to": [] }
                    ] },
                    { "species": { "url": species_url(132) }, "evolves_to": [] }
                ]
            }]
        }
    });
    let url = "https://pokeapi.co/api/v2/evolution-chain/9000/";
    let mock = Arc::new(MockUpstream::new().with_document(url, chain));

    let generations = dex(&mock).evolution(url, Language::En).await.unwrap();
    let shape: Vec<Vec<&str>> = generations.iter().map(|g| names(g)).collect();
    assert_eq!(
        shape,
        vec![
            vec!["bulbasaur"],
            vec!["ivysaur"],
            vec!["venusaur", "ditto"],
            vec!["eevee"],
        ]
    );
}

#[tokio::test]
async fn sibling_failure_aborts_the_chain() {
    let mock = mock();
    let url = detail(135);
    mock.fail(url.clone(), PokedexError::unavailable(&url, "status 503"));

    let err = dex(&mock).evolution(&chain_url(67), Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::UpstreamUnavailable { .. }));
}

#[tokio::test]
async fn non_numeric_species_reference_is_rejected() {
    let chain = json!({
        "chain": {
            "species": { "url": species_url(1) },
            "evolves_to": [
                { "species": { "url": "https://pokeapi.co/api/v2/pokemon-species/ivysaur/" } }
            ]
        }
    });
    let url = "https://pokeapi.co/api/v2/evolution-chain/9001/";
    let mock = Arc::new(MockUpstream::new().with_document(url, chain));

    let err = dex(&mock).evolution(url, Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::InvalidReference { .. }));
}

#[tokio::test]
async fn link_without_species_names_chain_and_position() {
    let chain = json!({
        "chain": {
            "species": { "url": species_url(133) },
            "evolves_to": [
                { "species": { "url": species_url(134) } },
                { "evolves_to": [] }
            ]
        }
    });
    let url = "https://pokeapi.co/api/v2/evolution-chain/9002/";
    let mock = Arc::new(MockUpstream::new().with_document(url, chain));

    let err = dex(&mock).evolution(url, Language::Es).await.unwrap_err();
    match err {
        PokedexError::InvalidReference { reference, reason } => {
            assert_eq!(reference, url);
            assert!(reason.contains("chain.evolves_to[1]"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
