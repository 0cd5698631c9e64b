use pokedex::{Language, PokedexError};

use crate::helpers::*;

#[tokio::test]
async fn detail_combines_record_and_chain() {
    let mock = mock();
    let view = dex(&mock).detail(id(2), Language::Es).await.unwrap();

    assert_eq!(view.data.basic.name, "ivysaur");
    assert_eq!(view.evolution.len(), 3);
    assert_eq!(names(&view.evolution[1]), ["ivysaur"]);
    // the requested record was resolved once and reused by the chain walk
    assert_eq!(mock.calls_to(&detail(2)), 1);
}

#[tokio::test]
async fn detail_propagates_chain_failures() {
    let mock = mock();
    let url = chain_url(66);
    mock.fail(url.clone(), PokedexError::not_found(&url));

    let err = dex(&mock).detail(id(132), Language::En).await.unwrap_err();
    assert!(matches!(err, PokedexError::UpstreamNotFound { .. }));
}
