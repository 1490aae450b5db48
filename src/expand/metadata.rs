//! Page metadata extraction.
//!
//! Scans raw markup text for a small fixed set of tag shapes: Open Graph
//! meta tags with a generic fallback for title and description. This is
//! deliberately regex scanning rather than HTML parsing — the patterns match
//! only the basic `property=... content=...` attribute order, first textual
//! match wins, and malformed markup is simply missed. Upgrading this to a
//! real parser would change observable behavior on such pages.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::expand::safety::classify;
use crate::models::Metadata;

// Tag shape patterns, case-insensitive
const OG_TITLE_PATTERN: &str =
    r#"(?i)<meta\s+property=["']og:title["']\s+content=["']([^"']*)["']"#;
const TITLE_TAG_PATTERN: &str = r"(?i)<title[^>]*>([^<]*)</title>";
const OG_DESCRIPTION_PATTERN: &str =
    r#"(?i)<meta\s+property=["']og:description["']\s+content=["']([^"']*)["']"#;
const META_DESCRIPTION_PATTERN: &str =
    r#"(?i)<meta\s+name=["']description["']\s+content=["']([^"']*)["']"#;
const OG_IMAGE_PATTERN: &str =
    r#"(?i)<meta\s+property=["']og:image["']\s+content=["']([^"']*)["']"#;
const OG_SITE_NAME_PATTERN: &str =
    r#"(?i)<meta\s+property=["']og:site_name["']\s+content=["']([^"']*)["']"#;

/// Helper function to safely compile a regex pattern, panicking with a
/// detailed error message if compilation fails. Used for static regex
/// patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static OG_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(OG_TITLE_PATTERN, "OG_TITLE_RE"));
static TITLE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TITLE_TAG_PATTERN, "TITLE_TAG_RE"));
static OG_DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(OG_DESCRIPTION_PATTERN, "OG_DESCRIPTION_RE"));
static META_DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(META_DESCRIPTION_PATTERN, "META_DESCRIPTION_RE"));
static OG_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(OG_IMAGE_PATTERN, "OG_IMAGE_RE"));
static OG_SITE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(OG_SITE_NAME_PATTERN, "OG_SITE_NAME_RE"));

fn first_capture(re: &Regex, content: &str) -> Option<String> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extracts the page title: `og:title` beats the document title element.
/// The title element's text is trimmed; the og value is taken verbatim.
pub fn extract_title(content: &str) -> Option<String> {
    first_capture(&OG_TITLE_RE, content)
        .or_else(|| first_capture(&TITLE_TAG_RE, content).map(|t| t.trim().to_string()))
}

/// Extracts the page description: `og:description` beats the generic
/// description meta tag.
pub fn extract_description(content: &str) -> Option<String> {
    first_capture(&OG_DESCRIPTION_RE, content)
        .or_else(|| first_capture(&META_DESCRIPTION_RE, content))
}

/// Extracts the `og:image` URL, normalized to absolute. A root-relative
/// value is prefixed with the page URL's scheme and authority; anything else
/// is returned as-is.
pub fn extract_image(content: &str, base_url: &str) -> Option<String> {
    let image = first_capture(&OG_IMAGE_RE, content)?;
    if image.starts_with('/') {
        if let Ok(base) = Url::parse(base_url) {
            return Some(format!("{}{}", base.origin().ascii_serialization(), image));
        }
    }
    Some(image)
}

/// Extracts `og:site_name`. No fallback.
pub fn extract_site_name(content: &str) -> Option<String> {
    first_capture(&OG_SITE_NAME_RE, content)
}

/// Fetches `url` once and scrapes metadata from its body.
///
/// Always succeeds at the type level: a transport failure yields a Metadata
/// value with every scraped field absent. The safety classification is
/// computed from the URL string regardless, since it needs no network.
///
/// The body is decoded leniently — invalid byte sequences are replaced
/// rather than failing the request.
pub async fn extract_metadata(url: &str, client: &reqwest::Client) -> Metadata {
    let is_safe = classify(url);

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("Error fetching metadata for {}: {}", url, e);
            return Metadata::unavailable(is_safe);
        }
    };

    // Grab the header before the body consumes the response
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    // reqwest's text() decodes lossily, so bad byte sequences are replaced
    let content = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Error reading metadata body for {}: {}", url, e);
            return Metadata::unavailable(is_safe);
        }
    };

    Metadata {
        title: extract_title(&content),
        description: extract_description(&content),
        image: extract_image(&content, url),
        site_name: extract_site_name(&content),
        content_type: Some(content_type),
        is_safe,
    }
}
