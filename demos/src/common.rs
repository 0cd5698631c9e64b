use std::sync::Arc;

use pokedex::{Language, Pokedex, PokedexError, Upstream};

/// Return an upstream for demos.
///
/// Uses the fixture-backed mock when `POKEDEX_DEMOS_USE_MOCK` is set, and the
/// public API with the default retry policy otherwise.
///
/// # Errors
/// Returns `InvalidArg` if the retry middleware fails validation.
pub fn get_upstream() -> Result<Arc<dyn Upstream>, PokedexError> {
    if std::env::var("POKEDEX_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Upstream for CI) ---");
        Ok(Arc::new(pokedex_mock::MockUpstream::new()))
    } else {
        pokedex_http::HttpUpstream::new().build()
    }
}

/// Build a `Pokedex` over [`get_upstream`].
///
/// # Errors
/// Propagates upstream or builder validation failures.
pub fn get_pokedex() -> Result<Pokedex, PokedexError> {
    Pokedex::builder().with_upstream(get_upstream()?).build()
}

/// Language from the first CLI argument, defaulting to Spanish.
///
/// # Errors
/// Returns `InvalidArg` for an unsupported tag.
pub fn language_arg(position: usize) -> Result<Language, PokedexError> {
    std::env::args()
        .nth(position)
        .map_or(Ok(Language::default()), |tag| tag.parse())
}
