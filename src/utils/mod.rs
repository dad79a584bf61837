//! Utility functions module
//!
//! This module contains output formatting helpers.

pub mod format;

pub use format::*;
