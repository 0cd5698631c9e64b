use std::sync::Arc;
use std::time::Duration;

use pokedex::{Language, PokedexError};
use pokedex_mock::{MockBehavior, MockUpstream};

use crate::helpers::*;

fn capability(err: PokedexError) -> String {
    match err {
        PokedexError::RequestTimeout { capability } => capability,
        other => panic!("expected RequestTimeout, got {other:?}"),
    }
}

#[tokio::test]
async fn page_is_bounded_by_request_timeout() {
    let mock = Arc::new(MockUpstream::new().with_latency(Duration::from_millis(200)));
    let dex = builder(&mock)
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = dex.page(0, 3, Language::Es).await.unwrap_err();
    assert_eq!(capability(err), "page");
}

#[tokio::test]
async fn evolution_and_detail_are_bounded() {
    let mock = mock();
    mock.set_behavior(chain_url(1), MockBehavior::Hang);
    let dex = builder(&mock)
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = dex.evolution(&chain_url(1), Language::Es).await.unwrap_err();
    assert_eq!(capability(err), "evolution");

    let err = dex.detail(id(1), Language::Es).await.unwrap_err();
    assert_eq!(capability(err), "detail");
}

#[tokio::test]
async fn no_deadline_by_default() {
    let mock = Arc::new(MockUpstream::new().with_latency(Duration::from_millis(20)));
    let dex = dex(&mock);
    assert!(dex.config().request_timeout.is_none());
    assert_eq!(dex.page(0, 3, Language::Es).await.unwrap().items.len(), 3);
}
