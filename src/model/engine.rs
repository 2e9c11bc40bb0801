//! Search engine records
//!
//! A search engine is a named query-template URL plus an icon. The icon is
//! either an absolute `http(s)` image URL or the [`GLOBE_ICON`] token.

use serde::{Deserialize, Serialize};

/// Icon token meaning "render the generic globe glyph"
pub const GLOBE_ICON: &str = "Globe";

/// One configured search provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    /// Unique, never reused identifier
    pub id: String,
    /// Display label
    pub name: String,
    /// Query template; the search term is appended to the end
    pub url: String,
    /// Image URL or [`GLOBE_ICON`]
    pub icon: String,
}

impl SearchEngine {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            icon: icon.into(),
        }
    }

    /// How this engine's icon should be drawn
    pub fn icon_kind(&self) -> EngineIcon<'_> {
        EngineIcon::from_field(&self.icon)
    }

    /// Build the URL for a search term by appending it to the template.
    pub fn query_url(&self, term: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
        format!("{}{}", self.url, encoded)
    }
}

/// Classification of an icon field for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineIcon<'a> {
    /// Remote image at the given URL
    Image(&'a str),
    /// Generic globe glyph
    Globe,
}

impl<'a> EngineIcon<'a> {
    /// Anything starting with `http` is an image; everything else falls back to the globe.
    pub fn from_field(icon: &'a str) -> Self {
        if icon.starts_with("http") {
            EngineIcon::Image(icon)
        } else {
            EngineIcon::Globe
        }
    }
}

/// Prefix `https://` unless the string already starts with `http`.
///
/// The check is a plain prefix test, so `httpbin.org` is left as is.
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}
