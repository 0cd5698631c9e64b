//! Static upstream documents modelled on the public API.

use serde_json::Value;

mod chains;
mod creatures;
mod listings;
mod localized;
mod species;

pub use creatures::{dream_image, front_image};
pub use listings::TOTAL_COUNT;

/// Root of every fixture URL.
pub const API: &str = "https://pokeapi.co/api/v2";

/// Detail/listing endpoint the fixtures are served under.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Reference URL of a creature, in the upstream's trailing-slash form.
#[must_use]
pub fn creature_ref(id: u32) -> String {
    format!("{BASE_URL}/{id}/")
}

/// Reference URL of a species.
#[must_use]
pub fn species_url(id: u32) -> String {
    format!("{API}/pokemon-species/{id}/")
}

/// Reference URL of a type.
#[must_use]
pub fn type_url(id: u32) -> String {
    format!("{API}/type/{id}/")
}

/// Reference URL of an ability.
#[must_use]
pub fn ability_url(id: u32) -> String {
    format!("{API}/ability/{id}/")
}

/// Reference URL of an evolution chain.
#[must_use]
pub fn chain_url(id: u32) -> String {
    format!("{API}/evolution-chain/{id}/")
}

/// Every fixture document keyed by the exact URL it is served under.
#[must_use]
pub fn all() -> Vec<(String, Value)> {
    let mut docs = Vec::new();
    docs.extend(creatures::documents());
    docs.extend(localized::documents());
    docs.extend(species::documents());
    docs.extend(chains::documents());
    docs.extend(listings::documents());
    docs
}

fn lang(tag: &str) -> Value {
    serde_json::json!({ "name": tag, "url": format!("{API}/language/{tag}/") })
}
