//! Configuration management module
//!
//! This module handles configuration loading and validation from
//! environment variables.

pub mod settings;

pub use settings::*;
