//! Configuration module.
//!
//! Re-exports configuration constants and types.

pub mod constants;
pub mod types;

pub use constants::{
    DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, MAX_URL_LENGTH,
    REQUEST_TIMEOUT_SECS, SHORTENER_DOMAINS,
};
pub use types::{ExpanderConfig, LogFormat, LogLevel, Opt};
