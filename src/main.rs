//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_expander` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - One-shot expansion (prints the result as JSON) or serving the HTTP API
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use url_expander::{init_logger_with, start_server, Expander, ExpandError, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    let log_level = opt.log_level.clone();
    let log_format = opt.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let expander =
        Expander::new(opt.expander_config()).context("Failed to initialize expander")?;

    if opt.serve {
        return start_server(opt.port, Arc::new(expander)).await;
    }

    let url = match opt.url {
        Some(url) => url,
        None => {
            eprintln!("url_expander: supply a URL to expand, or --serve to run the API server");
            process::exit(2);
        }
    };

    match expander.expand(&url).await {
        Ok(result) => {
            let body = serde_json::to_string_pretty(&result)
                .context("Failed to serialize expansion result")?;
            println!("{body}");
            Ok(())
        }
        Err(ExpandError::InvalidInput(msg)) => {
            eprintln!("url_expander: {msg}");
            process::exit(2);
        }
        Err(e) => {
            eprintln!("url_expander error: {e:#}");
            process::exit(1);
        }
    }
}
