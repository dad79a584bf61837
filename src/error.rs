use thiserror::Error;

/// Main error type for gcstash operations
#[derive(Debug, Error)]
pub enum GcstashError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to create storage client: {0}")]
    ClientInitError(String),

    #[error("Bucket metadata query failed for '{bucket}': {details}")]
    BucketQueryError { bucket: String, details: String },

    #[error("Failed to create bucket '{bucket}': {details}")]
    BucketCreateError { bucket: String, details: String },

    #[error("Bucket '{bucket}' does not exist. Please create the bucket first, e.g. with `gsutil mb gs://{bucket}`")]
    BucketNotFound { bucket: String },

    #[error("Failed to open source file '{path}': {details}")]
    FileOpenError { path: String, details: String },

    #[error("Upload stream failed: {0}")]
    StreamCopyError(String),

    #[error("Failed to finalize object write: {0}")]
    StreamCloseError(String),

    #[error("Failed to update object access control: {0}")]
    AclError(String),

    #[error("Failed to fetch object attributes for '{key}': {details}")]
    AttrsFetchError { key: String, details: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GcstashError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn client_init<S: Into<String>>(msg: S) -> Self {
        Self::ClientInitError(msg.into())
    }

    pub fn bucket_query<S: Into<String>>(bucket: S, details: S) -> Self {
        Self::BucketQueryError {
            bucket: bucket.into(),
            details: details.into(),
        }
    }

    pub fn bucket_create<S: Into<String>>(bucket: S, details: S) -> Self {
        Self::BucketCreateError {
            bucket: bucket.into(),
            details: details.into(),
        }
    }

    pub fn bucket_not_found<S: Into<String>>(bucket: S) -> Self {
        Self::BucketNotFound {
            bucket: bucket.into(),
        }
    }

    pub fn file_open<S: Into<String>>(path: S, details: S) -> Self {
        Self::FileOpenError {
            path: path.into(),
            details: details.into(),
        }
    }

    pub fn stream_copy<S: Into<String>>(msg: S) -> Self {
        Self::StreamCopyError(msg.into())
    }

    pub fn stream_close<S: Into<String>>(msg: S) -> Self {
        Self::StreamCloseError(msg.into())
    }

    pub fn acl<S: Into<String>>(msg: S) -> Self {
        Self::AclError(msg.into())
    }

    pub fn attrs_fetch<S: Into<String>>(key: S, details: S) -> Self {
        Self::AttrsFetchError {
            key: key.into(),
            details: details.into(),
        }
    }
}

/// Result type alias for gcstash operations
pub type Result<T> = std::result::Result<T, GcstashError>;
