//! Coarse URL safety classification.
//!
//! Pure string inspection, no network. The checks are intentionally shallow:
//! HTTPS presence and a fixed denylist of known link-shortener domains.

use url::Url;

use crate::config::SHORTENER_DOMAINS;
use crate::models::SafetyInfo;

/// Classifies a URL from its string alone. Never fails: an unparsable URL
/// yields an empty domain and no suspicion flag.
///
/// Shortener matching is substring-based against the host, so `bit.do`
/// also flags `www.bit.do`.
pub fn classify(url: &str) -> SafetyInfo {
    match Url::parse(url) {
        Ok(parsed) => {
            let domain = parsed.host_str().unwrap_or("").to_string();
            let is_suspicious = SHORTENER_DOMAINS.iter().any(|d| domain.contains(d));
            SafetyInfo {
                is_https: parsed.scheme() == "https",
                is_suspicious,
                domain,
            }
        }
        Err(_) => SafetyInfo {
            is_https: url.starts_with("https://"),
            is_suspicious: false,
            domain: String::new(),
        },
    }
}
