use std::sync::Arc;

use pokedex::{Language, Pokedex, UNKNOWN};
use pokedex_core::DEFAULT_IMAGE_NOT_AVAILABLE_URL;
use pokedex_mock::MockUpstream;
use serde_json::json;

use crate::helpers::*;

#[tokio::test]
async fn composes_localized_record() {
    let mock = mock();
    let rec = dex(&mock).get_detail(id(1), Language::Es).await.unwrap();

    assert_eq!(rec.basic.id, id(1));
    assert_eq!(rec.basic.name, "bulbasaur");
    assert_eq!(rec.basic.weight_kg, Some(6.9));
    assert_eq!(rec.height_m, Some(0.7));
    assert_eq!(rec.basic.type_names, ["Planta", "Veneno"]);
    assert_eq!(
        rec.basic.ability_descriptions,
        [
            "Potencia los ataques de tipo Planta en un apuro.",
            "Sube la Velocidad con sol intenso."
        ]
    );
    assert_eq!(rec.basic.image_list, front_image(1));
    assert_eq!(rec.image_detail, dream_image(1));
    assert_eq!(rec.species.evolution_chain_url, chain_url(1));
    assert_eq!(
        rec.species.flavor_text.as_deref(),
        Some("Una rara semilla le fue plantada en el lomo al nacer.")
    );
}

#[tokio::test]
async fn tenths_are_divided_by_ten() {
    let mock = Arc::new(MockUpstream::new().with_document(
        detail(500),
        json!({
            "name": "heavy",
            "weight": 692,
            "height": 28,
            "species": { "url": species_url(1) }
        }),
    ));
    let rec = dex(&mock).get_detail(id(500), Language::Es).await.unwrap();

    assert_eq!(rec.basic.weight_kg, Some(69.2));
    assert_eq!(rec.height_m, Some(2.8));
    assert!(rec.basic.type_names.is_empty());
    assert!(rec.basic.ability_descriptions.is_empty());
}

#[tokio::test]
async fn missing_measurements_stay_absent() {
    let mock = Arc::new(MockUpstream::new().with_document(
        detail(501),
        json!({ "name": "ghost", "species": { "url": species_url(1) } }),
    ));
    let rec = dex(&mock).get_detail(id(501), Language::Es).await.unwrap();
    assert_eq!(rec.basic.weight_kg, None);
    assert_eq!(rec.height_m, None);
}

#[tokio::test]
async fn detail_image_falls_back_to_list_image() {
    let mock = mock();
    let rec = dex(&mock).get_detail(id(3), Language::Es).await.unwrap();
    assert_eq!(rec.basic.image_list, front_image(3));
    assert_eq!(rec.image_detail, front_image(3));
}

#[tokio::test]
async fn no_images_fall_back_to_placeholder() {
    let mock = mock();
    let rec = dex(&mock).get_detail(id(132), Language::Es).await.unwrap();
    assert_eq!(rec.basic.image_list, DEFAULT_IMAGE_NOT_AVAILABLE_URL);
    assert_eq!(rec.image_detail, DEFAULT_IMAGE_NOT_AVAILABLE_URL);

    let custom: Pokedex = builder(&mock)
        .image_not_available_url("https://example.com/none.png")
        .build()
        .unwrap();
    let rec = custom.get_detail(id(132), Language::Es).await.unwrap();
    assert_eq!(rec.basic.image_list, "https://example.com/none.png");
    assert_eq!(rec.image_detail, "https://example.com/none.png");
}

#[tokio::test]
async fn detail_image_without_list_image_is_kept() {
    let mock = Arc::new(MockUpstream::new().with_document(
        detail(502),
        json!({
            "name": "vector-only",
            "sprites": { "front_default": null, "other": { "dream_world": { "front_default": "https://img/502.svg" } } },
            "species": { "url": species_url(1) }
        }),
    ));
    let rec = dex(&mock).get_detail(id(502), Language::Es).await.unwrap();
    assert_eq!(rec.basic.image_list, DEFAULT_IMAGE_NOT_AVAILABLE_URL);
    assert_eq!(rec.image_detail, "https://img/502.svg");
}

#[tokio::test]
async fn unmatched_languages_degrade_to_unknown() {
    let mock = mock();
    let rec = dex(&mock).get_detail(id(265), Language::Es).await.unwrap();
    // bug type and shield-dust carry no Spanish entry
    assert_eq!(rec.basic.type_names, [UNKNOWN]);
    assert_eq!(rec.basic.ability_descriptions, [UNKNOWN]);
    assert_eq!(
        rec.species.flavor_text.as_deref(),
        Some("Vive entre la hierba y en bosques.")
    );
}

#[tokio::test]
async fn blank_localized_values_are_skipped() {
    let mock = mock();
    let rec = dex(&mock).get_detail(id(132), Language::Es).await.unwrap();
    assert_eq!(rec.basic.ability_descriptions, ["Evita la parálisis."]);
    assert_eq!(rec.basic.type_names, ["Normal"]);
    assert_eq!(rec.species.flavor_text, None);
}

#[tokio::test]
async fn slots_without_reference_resolve_without_fetch() {
    let mock = Arc::new(MockUpstream::new().with_document(
        detail(503),
        json!({
            "name": "partial",
            "types": [ { "slot": 1, "type": { "name": "mystery" } }, { "slot": 2, "type": { "url": type_url(12) } } ],
            "abilities": [ { "slot": 1, "ability": null } ],
            "species": { "url": species_url(1) }
        }),
    ));
    let rec = dex(&mock).get_detail(id(503), Language::En).await.unwrap();
    assert_eq!(rec.basic.type_names, [UNKNOWN, "Grass"]);
    assert_eq!(rec.basic.ability_descriptions, [UNKNOWN]);
    // primary, one type, species
    assert_eq!(mock.total_calls(), 3);
}

#[tokio::test]
async fn failing_lookups_do_not_fail_the_record() {
    let mock = mock();
    let url = type_url(12);
    mock.fail(url.clone(), pokedex::PokedexError::unavailable(&url, "reset"));
    mock.fail(
        ability_url(34),
        pokedex::PokedexError::malformed(ability_url(34), "truncated"),
    );

    let rec = dex(&mock).get_detail(id(1), Language::Es).await.unwrap();
    assert_eq!(rec.basic.type_names, [UNKNOWN, "Veneno"]);
    assert_eq!(rec.basic.ability_descriptions[1], UNKNOWN);
}
