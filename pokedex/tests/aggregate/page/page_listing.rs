use std::sync::Arc;

use pokedex::{Language, PokedexError};
use pokedex_mock::MockUpstream;
use serde_json::json;

use crate::helpers::*;

#[tokio::test]
async fn page_resolves_items_in_listing_order() {
    let mock = mock();
    let page = dex(&mock).page(0, 3, Language::Es).await.unwrap();

    assert_eq!(page.total_count, TOTAL_COUNT);
    assert_eq!(names(&page.items), ["bulbasaur", "ivysaur", "venusaur"]);
    assert_eq!(page.items[0].type_names, ["Planta", "Veneno"]);
    assert_eq!(mock.calls_to(&listing(0, 3)), 1);
}

#[tokio::test]
async fn page_without_valid_entries_keeps_the_upstream_count() {
    let mock = mock();
    let page = dex(&mock).page(1, 3, Language::Es).await.unwrap();

    assert_eq!(page.total_count, TOTAL_COUNT);
    assert!(page.items.is_empty());
    // only the listing itself was fetched
    assert_eq!(mock.total_calls(), 1);
}

#[tokio::test]
async fn entries_without_url_are_dropped() {
    let mock = mock();
    let page = dex(&mock).page(2, 3, Language::En).await.unwrap();
    assert_eq!(names(&page.items), ["ditto", "eevee"]);
    assert_eq!(page.total_count, TOTAL_COUNT);
}

#[tokio::test]
async fn page_items_reuse_cached_records() {
    let mock = mock();
    let dex = dex(&mock);
    dex.get_detail(id(2), Language::Es).await.unwrap();

    mock.reset_calls();
    dex.page(0, 3, Language::Es).await.unwrap();
    assert_eq!(mock.calls_to(&detail(2)), 0);
    assert_eq!(mock.calls_to(&detail(1)), 1);
}

#[tokio::test]
async fn non_numeric_entry_is_invalid_reference() {
    let mock = Arc::new(MockUpstream::new().with_document(
        listing(9, 3),
        json!({
            "count": 10,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "weird", "url": "https://pokeapi.co/api/v2/pokemon/weird/" }
            ]
        }),
    ));
    let err = dex(&mock).page(3, 3, Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::InvalidReference { .. }));
}

#[tokio::test]
async fn item_failure_fails_the_page() {
    let mock = mock();
    let url = detail(3);
    mock.fail(url.clone(), PokedexError::unavailable(&url, "status 500"));

    let err = dex(&mock).page(0, 3, Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::UpstreamUnavailable { .. }));
}

#[tokio::test]
async fn listing_without_count_is_malformed() {
    let mock = Arc::new(
        MockUpstream::new().with_document(listing(0, 5), json!({ "results": [] })),
    );
    let err = dex(&mock).page(0, 5, Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::UpstreamMalformed { .. }));
}

#[tokio::test]
async fn invalid_paging_arguments_are_rejected() {
    let mock = mock();
    let dex = dex(&mock);

    let err = dex.page(0, 0, Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::InvalidArg(_)));
    let err = dex.page(u64::MAX, 2, Language::Es).await.unwrap_err();
    assert!(matches!(err, PokedexError::InvalidArg(_)));
    assert_eq!(mock.total_calls(), 0);
}
