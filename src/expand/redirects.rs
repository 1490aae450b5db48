//! HTTP redirect chain resolution.
//!
//! Follows redirects manually, one hop at a time, against a client with
//! auto-following disabled. Each hop's status code and URL is captured in an
//! ordered chain — information the transport's built-in redirect handling
//! would discard.

use reqwest::header::LOCATION;
use url::Url;

use crate::models::Hop;

/// Resolves a redirect target to an absolute URL.
///
/// A location beginning with `/` is combined with the current URL's scheme
/// and authority verbatim; an already-absolute location is used as-is;
/// anything else is resolved against the current URL per standard
/// relative-URL rules.
///
/// Returns `None` when the location cannot be made absolute (e.g. the
/// current URL itself no longer parses).
fn resolve_location(current: &str, location: &str) -> Option<String> {
    if location.starts_with('/') {
        let base = Url::parse(current).ok()?;
        return Some(format!("{}{}", base.origin().ascii_serialization(), location));
    }
    if location.starts_with("http://") || location.starts_with("https://") {
        return Some(location.to_string());
    }
    let base = Url::parse(current).ok()?;
    base.join(location).ok().map(|u| u.to_string())
}

/// Resolves the redirect chain for a URL, following redirects up to
/// `max_hops` hops.
///
/// Infallible at the type level: a transport error at any hop terminates
/// resolution at that hop with a status of 0, never as an `Err`. No hop is
/// retried. The returned final URL is the URL of the last chain hop, which
/// on failure may be a URL that never actually responded.
///
/// The chain always contains between 1 and `max_hops` hops, exactly one of
/// them marked final.
///
/// # Arguments
///
/// * `start_url` - The initial URL to start from (caller-validated)
/// * `max_hops` - Maximum number of hops in the chain
/// * `client` - HTTP client with redirects disabled (for manual tracking)
pub async fn resolve_redirect_chain(
    start_url: &str,
    max_hops: usize,
    client: &reqwest::Client,
) -> (String, Vec<Hop>) {
    let mut chain = vec![Hop::pending(start_url)];
    let mut current = start_url.to_string();

    for hop in 0..max_hops {
        let resp = match client.get(&current).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("Error following redirect {} at {}: {}", hop + 1, current, e);
                if let Some(last) = chain.last_mut() {
                    last.status_code = 0;
                    last.is_final = true;
                }
                break;
            }
        };

        let status = resp.status();
        if let Some(last) = chain.last_mut() {
            last.status_code = status.as_u16();
        }

        if status.is_redirection() {
            let location = resp
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            match location.and_then(|loc| resolve_location(&current, &loc)) {
                Some(next) => {
                    if chain.len() < max_hops {
                        log::debug!("Redirect {} -> {} ({})", current, next, status.as_u16());
                        chain.push(Hop::pending(&next));
                        current = next;
                        continue;
                    }
                    // Hop ceiling reached: stop without appending, the last
                    // hop is forced final below
                    log::warn!("Redirect ceiling of {} hops reached at {}", max_hops, current);
                    break;
                }
                None => {
                    log::warn!(
                        "Redirect status {} for {} but no usable Location header",
                        status.as_u16(),
                        current
                    );
                    if let Some(last) = chain.last_mut() {
                        last.is_final = true;
                    }
                    break;
                }
            }
        }

        // Non-redirect response, success or failure status: this is the end
        // of the chain
        if let Some(last) = chain.last_mut() {
            last.is_final = true;
        }
        break;
    }

    // Exactly one hop must be final. If no branch above marked one (ceiling
    // exit), restore the invariant on the last hop.
    if !chain.iter().any(|h| h.is_final) {
        if let Some(last) = chain.last_mut() {
            last.is_final = true;
        }
    }

    let final_url = chain.last().map(|h| h.url.clone()).unwrap_or(current);
    (final_url, chain)
}
