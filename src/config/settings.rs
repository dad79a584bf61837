//! Configuration settings management
//!
//! This module handles loading configuration from the process environment
//! and validating it before any remote call is made.

use crate::error::{GcstashError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Storage classes accepted by the service.
pub const STORAGE_CLASSES: &[&str] = &[
    "STANDARD",
    "MULTI_REGIONAL",
    "REGIONAL",
    "NEARLINE",
    "COLDLINE",
    "DURABLE_REDUCED_AVAILABILITY",
];

const DEFAULT_STORAGE_CLASS: &str = "STANDARD";

/// Immutable process configuration, built once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub project_id: String,
    pub bucket_name: String,
    pub storage_class: String,
    pub storage_location: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            bucket_name: String::new(),
            storage_class: DEFAULT_STORAGE_CLASS.to_string(),
            storage_location: String::new(),
        }
    }
}

impl Config {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build and validate configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            project_id: lookup("PROJECTID").unwrap_or_default(),
            bucket_name: lookup("BUCKETNAME").unwrap_or_default(),
            storage_class: lookup("STORAGE_CLASS")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_STORAGE_CLASS.to_string()),
            storage_location: lookup("STORAGE_LOC").unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.project_id.is_empty() {
            return Err(GcstashError::config("PROJECTID is required"));
        }

        if self.bucket_name.is_empty() {
            return Err(GcstashError::config("BUCKETNAME is required"));
        }

        if self.storage_location.is_empty() {
            return Err(GcstashError::config("STORAGE_LOC is required"));
        }

        if !STORAGE_CLASSES.contains(&self.storage_class.as_str()) {
            return Err(GcstashError::config(format!(
                "Unknown storage class '{}'; expected one of: {}",
                self.storage_class,
                STORAGE_CLASSES.join(", ")
            )));
        }

        Ok(())
    }
}
