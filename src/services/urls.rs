//! Shorten and resolve services.

use url::Url;

use super::helpers::generate_short_code;
use crate::errors::AppError;
use crate::models::{CreatedMapping, ShortenRequest};
use crate::store::UrlStore;

/// Parse and validate a target URL before any store mutation.
///
/// Accepts absolute `http`/`https` URLs with a host. The returned `Url` is the
/// normalized form that gets stored and echoed back as `original_url` (bare
/// authority URLs gain a trailing slash, scheme and host are lowercased).
pub fn parse_target_url(raw: &str) -> Result<Url, AppError> {
    let parsed =
        Url::parse(raw).map_err(|_| AppError::validation("Invalid URL format"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::validation("URL scheme must be http or https"));
    }
    if !parsed.has_host() {
        return Err(AppError::validation("URL must have a host"));
    }

    Ok(parsed)
}

/// Create a new shortened URL
///
/// Validates the target, then runs a bounded allocation loop: sample a random
/// code and try to claim it atomically via `insert_if_absent`. A successful
/// claim means the mapping is already stored, so there is no window between
/// the uniqueness check and the insert. Gives up with `CodeSpaceExhausted`
/// after `max_attempts` collisions instead of looping forever.
pub fn shorten_url(
    store: &UrlStore,
    request: &ShortenRequest,
    code_length: usize,
    max_attempts: u32,
) -> Result<CreatedMapping, AppError> {
    let target = parse_target_url(&request.url)?;
    let original_url = target.to_string();

    for _ in 0..max_attempts {
        let short_code = generate_short_code(code_length);
        if store.insert_if_absent(&short_code, &original_url) {
            log::info!("Stored mapping: {} -> {}", short_code, original_url);
            return Ok(CreatedMapping {
                short_code,
                original_url,
            });
        }
    }

    log::error!(
        "Gave up allocating a short code of length {} after {} attempts (store size: {})",
        code_length,
        max_attempts,
        store.len()
    );
    Err(AppError::code_space_exhausted(max_attempts))
}

/// Resolve a short code to its target URL
pub fn resolve_url(store: &UrlStore, short_code: &str) -> Result<String, AppError> {
    store.get(short_code).ok_or_else(|| {
        log::warn!("Short code {} not found", short_code);
        AppError::short_code_not_found()
    })
}
