//! url_expander library: redirect chain resolution and page metadata extraction
//!
//! This library expands a URL by manually following its HTTP redirect chain —
//! auto-following is disabled at the transport so every intermediate hop's
//! status code and URL can be recorded — then scrapes the final destination
//! for link-preview metadata (title, description, image, site name) and
//! derives a coarse safety classification from the URL string.
//!
//! # Example
//!
//! ```no_run
//! use url_expander::{Expander, ExpanderConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expander = Expander::new(ExpanderConfig::default())?;
//! let result = expander.expand("https://bit.do/example").await?;
//!
//! println!("{} resolved to {} in {} hops",
//!          result.original_url,
//!          result.final_url,
//!          result.redirect_chain.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod expand;
mod initialization;
pub mod models;
pub mod server;

// Re-export public API
pub use config::{ExpanderConfig, LogFormat, LogLevel, Opt};
pub use error::{ExpandError, InitializationError};
pub use expand::{validate_url_format, Expander};
pub use initialization::init_logger_with;
pub use models::{ExpansionResult, Hop, Metadata, SafetyInfo};
pub use server::start_server;
