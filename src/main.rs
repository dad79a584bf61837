//! gcstash - Google Cloud Storage upload tool
//!
//! Uploads a single local file to a Google Cloud Storage bucket,
//! creating the bucket first when it does not exist, then reports the
//! object's URL, size, and MD5.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod storage;
mod upload;
mod utils;

use crate::cli::Cli;
use crate::error::{GcstashError, Result};

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.debug);

    // Execute the upload
    if let Err(e) = run(cli).await {
        error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting gcstash");

    // The .env file carries the credential path the client library reads;
    // real environment variables win over its contents.
    dotenvy::dotenv()
        .map_err(|e| GcstashError::config(format!("failed to load .env file: {e}")))?;

    let config = config::Config::from_env()?;

    cli.execute(config).await
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "gcstash=debug" } else { "gcstash=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
