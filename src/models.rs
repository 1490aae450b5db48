//! Response data model.
//!
//! These types make up the JSON body returned for a successful expansion.
//! They are constructed fresh per request and discarded after serialization;
//! nothing here is shared across requests.

use serde::{Deserialize, Serialize};

/// One step in a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// The absolute URL requested at this step.
    pub url: String,
    /// HTTP status observed for this hop; 0 if never obtained (transport
    /// failure, or the hop was never completed).
    pub status_code: u16,
    /// True exactly for the hop at which resolution stopped.
    pub is_final: bool,
}

impl Hop {
    /// Creates a hop that has not been requested yet.
    pub fn pending(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: 0,
            is_final: false,
        }
    }
}

/// Coarse safety classification derived from the URL string alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyInfo {
    /// True iff the URL scheme is exactly "https".
    pub is_https: bool,
    /// True iff the host matches an entry of the shortener denylist.
    pub is_suspicious: bool,
    /// The host component of the URL, or empty if unparsable.
    pub domain: String,
}

/// Metadata scraped from the final page. Each field is independently
/// optional; a failed fetch leaves all scraped fields absent but still
/// carries the safety classification, which needs no network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// og:title content, else the document title element's inner text.
    pub title: Option<String>,
    /// og:description content, else the generic description meta tag.
    pub description: Option<String>,
    /// og:image content as an absolute URL.
    pub image: Option<String>,
    /// og:site_name content (no fallback).
    pub site_name: Option<String>,
    /// Raw Content-Type header value; empty string when the response had no
    /// such header, None when the fetch itself failed.
    pub content_type: Option<String>,
    /// Safety classification of the fetched URL.
    pub is_safe: SafetyInfo,
}

impl Metadata {
    /// Metadata for a page that could not be fetched: every scraped field
    /// absent, safety classification still present.
    pub fn unavailable(is_safe: SafetyInfo) -> Self {
        Self {
            title: None,
            description: None,
            image: None,
            site_name: None,
            content_type: None,
            is_safe,
        }
    }
}

/// The complete result of expanding one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionResult {
    /// The URL as supplied by the caller.
    pub original_url: String,
    /// The URL of the final chain hop. On transport failure this is simply
    /// wherever the chain stopped, which may be a URL that never responded.
    pub final_url: String,
    /// Ordered hop list from original to final URL.
    pub redirect_chain: Vec<Hop>,
    /// Metadata extracted from the final URL.
    pub metadata: Metadata,
    /// Wall-clock duration of the whole resolution + extraction, in
    /// milliseconds.
    pub expansion_time_ms: u64,
}
