//! URL expansion: redirect resolution plus metadata extraction.
//!
//! The [`Expander`] owns a redirect-disabled HTTP client and the
//! configuration for outbound requests. It holds no mutable state, so one
//! instance can serve concurrent expansions.

pub mod metadata;
pub mod redirects;
pub mod safety;

use std::time::Instant;

use crate::config::{ExpanderConfig, MAX_URL_LENGTH};
use crate::error::ExpandError;
use crate::initialization::init_client;
use crate::models::ExpansionResult;

/// Validates the raw `url` query value.
///
/// Rejects a missing or empty value with "Missing URL parameter" and a value
/// that does not begin with `http://` or `https://` (or is unreasonably
/// long) with "Invalid URL format". The messages are surfaced verbatim to
/// the caller.
pub fn validate_url_format(url: Option<&str>) -> Result<&str, ExpandError> {
    let url = match url {
        Some(u) if !u.is_empty() => u,
        _ => return Err(ExpandError::InvalidInput("Missing URL parameter".into())),
    };
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ExpandError::InvalidInput("Invalid URL format".into()));
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(ExpandError::InvalidInput("Invalid URL format".into()));
    }
    Ok(url)
}

/// Expands URLs by walking their redirect chains and scraping the final
/// destination.
#[derive(Debug, Clone)]
pub struct Expander {
    client: reqwest::Client,
    config: ExpanderConfig,
}

impl Expander {
    /// Creates an expander with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::HttpClientError`] if the HTTP client cannot be
    /// built.
    pub fn new(config: ExpanderConfig) -> Result<Self, ExpandError> {
        let client = init_client(&config)?;
        Ok(Self { client, config })
    }

    /// Expands a single URL: resolves the redirect chain, extracts metadata
    /// from the final destination, and measures the whole operation.
    ///
    /// Transport failures along the way are recorded in-band on the result
    /// (hop status 0, absent metadata fields) rather than returned as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::InvalidInput`] if `url` is empty or does not
    /// begin with `http://`/`https://`.
    pub async fn expand(&self, url: &str) -> Result<ExpansionResult, ExpandError> {
        let url = validate_url_format(Some(url))?;

        let start = Instant::now();
        let (final_url, redirect_chain) =
            redirects::resolve_redirect_chain(url, self.config.max_hops, &self.client).await;
        let metadata = metadata::extract_metadata(&final_url, &self.client).await;
        let expansion_time_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "Expanded {} -> {} ({} hop{}, {} ms)",
            url,
            final_url,
            redirect_chain.len(),
            if redirect_chain.len() == 1 { "" } else { "s" },
            expansion_time_ms
        );

        Ok(ExpansionResult {
            original_url: url.to_string(),
            final_url,
            redirect_chain,
            metadata,
            expansion_time_ms,
        })
    }
}
