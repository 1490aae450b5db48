//! Configuration constants.
//!
//! This module defines the default operational parameters used throughout the
//! application: timeouts, redirect limits, and the shortener denylist.

/// Default User-Agent string for HTTP requests.
///
/// Sent on every outbound request (redirect resolution and metadata fetch).
/// Some shorteners serve different redirect targets to clients without a
/// browser-looking User-Agent, so this identifies us while still looking
/// like a WebKit client.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (URLXpanda) AppleWebKit/537.36";

/// Per-request timeout in seconds.
///
/// Applies independently to every hop of the redirect chain and to the
/// metadata fetch. There are no retries, so this bounds how long a single
/// slow hop can stall a request.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Redirect handling
/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains.
/// The returned chain never contains more hops than this.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Maximum URL length (2048 characters) to prevent abuse via extremely long URLs.
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

/// Known link-shortener domains used for coarse safety flagging.
///
/// Matching is substring-based against the URL's host, not exact-host: a host
/// of `www.tinyurl.com` is flagged by the `tinyurl.com` entry.
pub const SHORTENER_DOMAINS: &[&str] = &["bit.do", "tinyurl.com", "goo.gl", "t.co"];

/// Default port for the HTTP API server.
pub const DEFAULT_SERVER_PORT: u16 = 8000;
