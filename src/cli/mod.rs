//! CLI module for gcstash
//!
//! This module contains command-line interface related functionality,
//! including argument parsing and command execution.

pub mod commands;

pub use commands::*;
