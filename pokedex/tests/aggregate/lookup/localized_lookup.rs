use std::sync::Arc;

use pokedex::{Language, LocalizedField, UNKNOWN};
use pokedex_mock::MockUpstream;
use serde_json::json;

use crate::helpers::*;

#[tokio::test]
async fn returns_value_for_requested_language() {
    let mock = mock();
    let dex = dex(&mock);
    let url = type_url(12);

    assert_eq!(dex.localized(&url, Language::Fr, LocalizedField::Names).await, "Plante");
    assert_eq!(dex.localized(&url, Language::Ja, LocalizedField::Names).await, "くさ");
    assert_eq!(dex.localized(&url, Language::En, LocalizedField::Names).await, "Grass");
}

#[tokio::test]
async fn unmatched_language_is_unknown() {
    let mock = mock();
    let dex = dex(&mock);
    assert_eq!(
        dex.localized(&type_url(12), Language::De, LocalizedField::Names).await,
        UNKNOWN
    );
    // the collection exists but under a different field
    assert_eq!(
        dex.localized(&type_url(12), Language::Es, LocalizedField::FlavorText)
            .await,
        UNKNOWN
    );
}

#[tokio::test]
async fn unreachable_resource_is_unknown() {
    let mock = mock();
    let url = "https://pokeapi.co/api/v2/type/9999/";
    assert_eq!(
        dex(&mock).localized(url, Language::Es, LocalizedField::Names).await,
        UNKNOWN
    );
    assert_eq!(mock.calls_to(url), 1);
}

#[tokio::test]
async fn earliest_match_wins() {
    let url = "https://pokeapi.co/api/v2/ability/9000/";
    let mock = Arc::new(MockUpstream::new().with_document(
        url,
        json!({
            "flavor_text_entries": [
                { "flavor_text": "primero", "language": { "name": "es" } },
                { "flavor_text": "first", "language": { "name": "en" } },
                { "flavor_text": "segundo", "language": { "name": "es" } }
            ]
        }),
    ));
    assert_eq!(
        dex(&mock)
            .localized(url, Language::Es, LocalizedField::FlavorText)
            .await,
        "primero"
    );
}

#[tokio::test]
async fn language_match_is_case_sensitive() {
    let url = "https://pokeapi.co/api/v2/type/9001/";
    let mock = Arc::new(MockUpstream::new().with_document(
        url,
        json!({ "names": [ { "name": "Roca", "language": { "name": "ES" } } ] }),
    ));
    assert_eq!(
        dex(&mock).localized(url, Language::Es, LocalizedField::Names).await,
        UNKNOWN
    );
}
