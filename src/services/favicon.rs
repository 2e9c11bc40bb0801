//! Favicon URL construction
//!
//! Icons are resolved by an external favicon service. We only build the
//! URL string; whoever displays the image performs the actual request.

use crate::model::normalize_url;
use url::Url;

/// Base endpoint of the favicon resolution service
pub const FAVICON_SERVICE: &str = "https://t2.gstatic.com/faviconV2";

/// Requested icon size in pixels
pub const FAVICON_SIZE: u32 = 128;

/// Build the favicon service URL for a site origin (e.g. `https://example.com`).
pub fn favicon_url_for_origin(origin: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(origin.as_bytes()).collect();
    format!(
        "{}?client=SOCIAL&type=FAVICON&fallback_opts=TYPE,SIZE,URL&url={}&size={}",
        FAVICON_SERVICE, encoded, FAVICON_SIZE
    )
}

/// Resolve the favicon URL for whatever the user typed into a URL field.
///
/// Returns `None` for empty input or input that does not parse as a URL
/// after `https://` normalization.
pub fn favicon_url_for(target_url: &str) -> Option<String> {
    if target_url.is_empty() {
        return None;
    }

    let normalized = normalize_url(target_url);
    let parsed = match Url::parse(&normalized) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!("Ignoring icon fetch for unparseable URL {:?}: {}", normalized, e);
            return None;
        }
    };

    let origin = parsed.origin();
    if !origin.is_tuple() {
        tracing::debug!("Ignoring icon fetch for URL without origin: {}", normalized);
        return None;
    }

    Some(favicon_url_for_origin(&origin.ascii_serialization()))
}
