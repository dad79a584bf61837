//! Upload pipeline module
//!
//! Key derivation, the sequential ensure-bucket/upload flow, and the
//! result model reported to the user.

pub mod key;
pub mod models;
pub mod pipeline;

pub use models::UploadOutcome;
pub use pipeline::{ensure_bucket, run_upload, upload_file};
