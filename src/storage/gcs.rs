//! Google Cloud Storage backend
//!
//! Production `ObjectStore` implementation over the GCS data-plane
//! (`Storage`) and control-plane (`StorageControl`) clients. Credentials
//! are resolved by the client library itself, typically through
//! `GOOGLE_APPLICATION_CREDENTIALS`.

use crate::error::{GcstashError, Result};
use crate::storage::backend::{BucketSpec, ObjectAttrs, ObjectStore};
use async_trait::async_trait;
use google_cloud_gax::error::rpc::Code;
use google_cloud_storage::client::{Storage, StorageControl};
use google_cloud_storage::model::{Bucket, ObjectAccessControl};
use google_cloud_wkt::FieldMask;
use tokio::fs::File;
use tracing::debug;

const ALL_USERS: &str = "allUsers";
const ROLE_READER: &str = "READER";

/// GCS-backed object store holding one client per plane, used
/// sequentially for the lifetime of the process.
pub struct GcsStore {
    storage: Storage,
    control: StorageControl,
}

impl GcsStore {
    /// Build both clients with application-default credentials.
    pub async fn connect() -> Result<Self> {
        let storage = Storage::builder()
            .build()
            .await
            .map_err(|e| GcstashError::client_init(format!("storage client: {e}")))?;
        let control = StorageControl::builder()
            .build()
            .await
            .map_err(|e| GcstashError::client_init(format!("storage control client: {e}")))?;

        Ok(Self { storage, control })
    }
}

/// The control plane addresses buckets by full resource path.
fn bucket_path(bucket: &str) -> String {
    format!("projects/_/buckets/{bucket}")
}

fn is_not_found(err: &google_cloud_gax::error::Error) -> bool {
    if let Some(status) = err.status() {
        return status.code == Code::NotFound;
    }
    err.http_status_code() == Some(404)
}

#[async_trait]
impl ObjectStore for GcsStore {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        let result = self
            .control
            .get_bucket()
            .set_name(bucket_path(bucket))
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(GcstashError::bucket_query(
                bucket.to_string(),
                e.to_string(),
            )),
        }
    }

    async fn create_bucket(&self, spec: &BucketSpec) -> Result<()> {
        self.control
            .create_bucket()
            .set_parent("projects/_")
            .set_bucket_id(&spec.name)
            .set_bucket(
                Bucket::new()
                    .set_project(format!("projects/{}", spec.project_id))
                    .set_storage_class(&spec.storage_class)
                    .set_location(&spec.location),
            )
            .send()
            .await
            .map_err(|e| GcstashError::bucket_create(spec.name.clone(), e.to_string()))?;

        debug!(bucket = %spec.name, "created bucket");
        Ok(())
    }

    async fn write_object(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        source: File,
    ) -> Result<()> {
        // Copy and finalize happen in a single send; the object is
        // committed only if this call returns Ok.
        self.storage
            .write_object(bucket_path(bucket), key, source)
            .set_content_type(content_type)
            .send_unbuffered()
            .await
            .map_err(|e| {
                if is_not_found(&e) {
                    GcstashError::bucket_not_found(bucket.to_string())
                } else {
                    GcstashError::stream_copy(e.to_string())
                }
            })?;

        Ok(())
    }

    async fn set_public_read(&self, bucket: &str, key: &str) -> Result<()> {
        let object = self
            .control
            .get_object()
            .set_bucket(bucket_path(bucket))
            .set_object(key)
            .send()
            .await
            .map_err(|e| GcstashError::acl(e.to_string()))?;

        let metageneration = object.metageneration;
        let mut acl = object.acl.clone();
        acl.push(
            ObjectAccessControl::new()
                .set_entity(ALL_USERS)
                .set_role(ROLE_READER),
        );

        self.control
            .update_object()
            .set_if_metageneration_match(metageneration)
            .set_object(object.set_acl(acl))
            .set_update_mask(FieldMask::default().set_paths(["acl"]))
            .send()
            .await
            .map_err(|e| GcstashError::acl(e.to_string()))?;

        debug!(bucket, key, "granted public read access");
        Ok(())
    }

    async fn object_attrs(&self, bucket: &str, key: &str) -> Result<ObjectAttrs> {
        let object = self
            .control
            .get_object()
            .set_bucket(bucket_path(bucket))
            .set_object(key)
            .send()
            .await
            .map_err(|e| GcstashError::attrs_fetch(key.to_string(), e.to_string()))?;

        let md5 = object
            .checksums
            .as_ref()
            .map(|checksums| checksums.md5_hash.to_vec())
            .unwrap_or_default();

        Ok(ObjectAttrs {
            bucket: bucket.to_string(),
            name: object.name,
            size: object.size as u64,
            md5,
        })
    }
}
