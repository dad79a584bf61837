//! Storage backend abstraction
//!
//! The upload pipeline talks to the remote store through the `ObjectStore`
//! trait so it can be driven against a fake implementation in tests.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs::File;

/// Attributes a new bucket is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSpec {
    pub project_id: String,
    pub name: String,
    pub storage_class: String,
    pub location: String,
}

/// Metadata about a stored object, fetched after the write completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectAttrs {
    pub bucket: String,
    pub name: String,
    pub size: u64,
    /// Raw MD5 digest bytes; empty when the service reports none.
    pub md5: Vec<u8>,
}

/// Remote object-storage capabilities used by the upload pipeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Query bucket metadata. `Ok(false)` means the service reported the
    /// bucket as missing; any other query failure is an error.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Create a bucket with the given attributes. Not retried.
    async fn create_bucket(&self, spec: &BucketSpec) -> Result<()>;

    /// Stream an open file to `key`, finalizing the object before
    /// returning. The object is not guaranteed durable until this
    /// call succeeds.
    async fn write_object(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        source: File,
    ) -> Result<()>;

    /// Grant public read access (`allUsers`) on an existing object.
    async fn set_public_read(&self, bucket: &str, key: &str) -> Result<()>;

    /// Fetch the attributes of a stored object.
    async fn object_attrs(&self, bucket: &str, key: &str) -> Result<ObjectAttrs>;
}
