//! Table formatting and output utilities
//!
//! This module renders the upload report either as a styled table or as
//! JSON.

use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Report formatter for the selected output format
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render report rows in the configured format.
    pub fn format_report<T: Tabled + Serialize>(&self, data: &[T]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_as_table(data)),
            OutputFormat::Json => self.format_as_json(data),
        }
    }

    /// Format data as a styled table
    fn format_as_table<T: Tabled>(&self, data: &[T]) -> String {
        let mut table = Table::new(data);
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Padding::new(1, 1, 0, 0));
        table.to_string()
    }

    /// Format data as JSON; a single row renders as one object
    fn format_as_json<T: Serialize>(&self, data: &[T]) -> Result<String> {
        let rendered = match data {
            [row] => serde_json::to_string_pretty(row)?,
            rows => serde_json::to_string_pretty(rows)?,
        };
        Ok(rendered)
    }
}
