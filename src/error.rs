//! Error type definitions.
//!
//! Per-hop and per-fetch failures are deliberately NOT errors: they are
//! recorded in-band on the result structure (a hop status of 0, absent
//! metadata fields). The error types here cover the cases that genuinely
//! abort an operation: rejected input and component setup failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors that can abort a URL expansion before any hop is attempted.
#[derive(Error, Debug)]
pub enum ExpandError {
    /// The supplied URL was missing or malformed. The message is
    /// user-correctable and surfaced verbatim ("Missing URL parameter",
    /// "Invalid URL format").
    #[error("{0}")]
    InvalidInput(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}
