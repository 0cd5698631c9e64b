use url::Url;

use crate::{EntityId, PokedexError};

/// Extract the entity id from a reference URL.
///
/// The id is the last non-empty path segment, so both `…/pokemon/25` and the
/// upstream's native `…/pokemon/25/` resolve to `25`.
///
/// # Errors
/// Returns `InvalidReference` when the reference is empty, is not an absolute
/// URL, or its last segment is not a positive base-10 integer.
pub fn entity_id_from_reference(reference: &str) -> Result<EntityId, PokedexError> {
    if reference.trim().is_empty() {
        return Err(PokedexError::invalid_reference(reference, "empty reference"));
    }
    let url = Url::parse(reference)
        .map_err(|e| PokedexError::invalid_reference(reference, e.to_string()))?;
    let last = url
        .path_segments()
        .and_then(|segs| segs.filter(|s| !s.is_empty()).next_back())
        .ok_or_else(|| PokedexError::invalid_reference(reference, "no path segment"))?;
    let raw: u32 = last.parse().map_err(|_| {
        PokedexError::invalid_reference(reference, format!("segment {last:?} is not numeric"))
    })?;
    EntityId::new(raw).map_err(|_| PokedexError::invalid_reference(reference, "id must be positive"))
}

/// Validate and parse a configured base URL.
///
/// # Errors
/// Returns `InvalidArg` when `raw` is not an absolute http(s) URL.
pub fn parse_base_url(raw: &str) -> Result<Url, PokedexError> {
    let url = Url::parse(raw)
        .map_err(|e| PokedexError::InvalidArg(format!("invalid base url {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PokedexError::InvalidArg(format!(
            "unsupported base url scheme: {other}"
        ))),
    }
}

/// URL of the primary record for `id`: `<base>/<id>`.
#[must_use]
pub fn detail_url(base: &Url, id: EntityId) -> String {
    format!("{}/{}", base.as_str().trim_end_matches('/'), id)
}

/// URL of a listing page: `<base>?offset=<offset>&limit=<limit>`.
#[must_use]
pub fn listing_url(base: &Url, offset: u64, limit: u32) -> String {
    let mut url = base.clone();
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair("offset", &offset.to_string())
        .append_pair("limit", &limit.to_string());
    url.into()
}
