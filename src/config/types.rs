//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the expander itself.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, REQUEST_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Expander configuration (no CLI dependencies).
///
/// Holds the values the resolver and extractor need for every outbound
/// request. These are explicit fields rather than process-wide globals so the
/// expander can be constructed with different settings per instance (tests
/// use short timeouts, for example).
#[derive(Debug, Clone)]
pub struct ExpanderConfig {
    /// HTTP User-Agent header value sent on every request
    pub user_agent: String,

    /// Per-request timeout in seconds (applies to each hop independently)
    pub timeout_seconds: u64,

    /// Maximum number of redirect hops to follow
    pub max_hops: usize,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            max_hops: MAX_REDIRECT_HOPS,
        }
    }
}

/// Command-line options.
///
/// With a URL argument the binary expands it once and prints the result JSON.
/// With `--serve` it runs the HTTP API server instead.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "url_expander",
    about = "Expand shortened URLs by following their redirect chain"
)]
pub struct Opt {
    /// URL to expand (omit when using --serve)
    pub url: Option<String>,

    /// Run the HTTP API server instead of a one-shot expansion
    #[arg(long)]
    pub serve: bool,

    /// Port for the HTTP API server
    #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum number of redirect hops to follow
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_hops: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the expander configuration from the parsed CLI options.
    pub fn expander_config(&self) -> ExpanderConfig {
        ExpanderConfig {
            user_agent: self.user_agent.clone(),
            timeout_seconds: self.timeout_seconds,
            max_hops: self.max_hops,
        }
    }
}
