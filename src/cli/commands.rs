//! CLI commands and argument parsing
//!
//! This module defines the command-line interface structure using clap
//! and drives the upload pipeline against the GCS backend.

use crate::config::Config;
use crate::error::Result;
use crate::storage::GcsStore;
use crate::upload::pipeline::run_upload;
use crate::utils::format::{OutputFormat, ReportFormatter};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "gcstash")]
#[command(about = "Upload a file to Google Cloud Storage, creating the bucket if needed")]
#[command(version, author)]
pub struct Cli {
    /// Local file to upload
    pub file: PathBuf,

    /// Grant public read access to the uploaded object
    #[arg(long)]
    pub public: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Execute the upload and print the report.
    pub async fn execute(self, config: Config) -> Result<()> {
        let store = GcsStore::connect().await?;

        let outcome = run_upload(&store, &config, &self.file, self.public).await?;

        info!("URL: {}", outcome.url);
        info!("Size: {}", outcome.size);
        info!("MD5: {}", outcome.md5);

        let formatter = ReportFormatter::new(self.format);
        println!("{}", formatter.format_report(&[outcome])?);

        Ok(())
    }
}
