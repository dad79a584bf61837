//! Upload pipeline
//!
//! The sequential check-bucket, create-if-absent, upload flow. Every step
//! is a precondition for the next; any failure aborts the run. The remote
//! store is injected so the flow can be exercised without network access.

use crate::config::Config;
use crate::error::{GcstashError, Result};
use crate::storage::{BucketSpec, ObjectStore};
use crate::upload::key::destination_key;
use crate::upload::models::UploadOutcome;
use chrono::Local;
use std::path::Path;
use tokio::fs::File;
use tracing::{debug, info};

/// Query bucket existence and create the bucket with the configured
/// storage class and location when the service reports it missing.
/// Query failures other than "not found" propagate without a creation
/// attempt. Creation is not retried.
pub async fn ensure_bucket(store: &dyn ObjectStore, config: &Config) -> Result<()> {
    if store.bucket_exists(&config.bucket_name).await? {
        debug!(bucket = %config.bucket_name, "bucket already exists");
        return Ok(());
    }

    let spec = BucketSpec {
        project_id: config.project_id.clone(),
        name: config.bucket_name.clone(),
        storage_class: config.storage_class.clone(),
        location: config.storage_location.clone(),
    };
    store.create_bucket(&spec).await?;

    info!(
        bucket = %config.bucket_name,
        storage_class = %config.storage_class,
        location = %config.storage_location,
        "created bucket"
    );
    Ok(())
}

/// Upload one file to `key`, optionally granting public read access
/// after the write completes, and report the finalized object's
/// attributes. No cleanup of a half-written object is attempted on
/// failure.
pub async fn upload_file(
    store: &dyn ObjectStore,
    config: &Config,
    source: &Path,
    key: &str,
    make_public: bool,
) -> Result<UploadOutcome> {
    let content_type = mime_guess::from_path(source)
        .first_or_octet_stream()
        .to_string();

    let file = File::open(source)
        .await
        .map_err(|e| GcstashError::file_open(source.display().to_string(), e.to_string()))?;

    store
        .write_object(&config.bucket_name, key, &content_type, file)
        .await?;

    if make_public {
        store.set_public_read(&config.bucket_name, key).await?;
    }

    let attrs = store.object_attrs(&config.bucket_name, key).await?;
    Ok(UploadOutcome::from_attrs(&attrs))
}

/// Run the full pipeline for one local file: ensure the bucket, derive
/// the dated destination key from the file's base name, and upload.
pub async fn run_upload(
    store: &dyn ObjectStore,
    config: &Config,
    source: &Path,
    make_public: bool,
) -> Result<UploadOutcome> {
    ensure_bucket(store, config).await?;

    let base_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            GcstashError::file_open(
                source.display().to_string(),
                "path has no file name".to_string(),
            )
        })?;

    let key = destination_key(Local::now().date_naive(), base_name);
    debug!(%key, "derived destination key");

    upload_file(store, config, source, &key, make_public).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::MockObjectStore;
    use crate::storage::ObjectAttrs;
    use mockall::Sequence;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn test_config() -> Config {
        Config {
            project_id: "test-project".to_string(),
            bucket_name: "test-bucket".to_string(),
            storage_class: "NEARLINE".to_string(),
            storage_location: "us-east1".to_string(),
        }
    }

    fn test_attrs(key: &str, size: u64) -> ObjectAttrs {
        ObjectAttrs {
            bucket: "test-bucket".to_string(),
            name: key.to_string(),
            size,
            md5: vec![0xab, 0xcd],
        }
    }

    #[tokio::test]
    async fn test_ensure_bucket_noop_when_present() {
        let mut store = MockObjectStore::new();
        store
            .expect_bucket_exists()
            .withf(|bucket| bucket == "test-bucket")
            .times(1)
            .returning(|_| Ok(true));
        store.expect_create_bucket().never();

        ensure_bucket(&store, &test_config()).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_bucket_creates_with_configured_attrs() {
        let mut store = MockObjectStore::new();
        store.expect_bucket_exists().returning(|_| Ok(false));
        store
            .expect_create_bucket()
            .withf(|spec| {
                spec.project_id == "test-project"
                    && spec.name == "test-bucket"
                    && spec.storage_class == "NEARLINE"
                    && spec.location == "us-east1"
            })
            .times(1)
            .returning(|_| Ok(()));

        ensure_bucket(&store, &test_config()).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_bucket_propagates_query_error() {
        let mut store = MockObjectStore::new();
        store.expect_bucket_exists().returning(|_| {
            Err(GcstashError::bucket_query(
                "test-bucket".to_string(),
                "permission denied".to_string(),
            ))
        });
        store.expect_create_bucket().never();

        let err = ensure_bucket(&store, &test_config()).await.unwrap_err();
        assert!(matches!(err, GcstashError::BucketQueryError { .. }));
    }

    #[tokio::test]
    async fn test_create_failure_aborts_before_upload() {
        let mut store = MockObjectStore::new();
        store.expect_bucket_exists().returning(|_| Ok(false));
        store.expect_create_bucket().returning(|spec| {
            Err(GcstashError::bucket_create(
                spec.name.clone(),
                "name already taken".to_string(),
            ))
        });
        store.expect_write_object().never();

        let err = run_upload(
            &store,
            &test_config(),
            Path::new("unused.txt"),
            false,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GcstashError::BucketCreateError { .. }));
    }

    #[tokio::test]
    async fn test_missing_source_file_is_fatal() {
        let mut store = MockObjectStore::new();
        store.expect_bucket_exists().returning(|_| Ok(true));
        store.expect_write_object().never();

        let err = run_upload(
            &store,
            &test_config(),
            Path::new("/no/such/file.txt"),
            false,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GcstashError::FileOpenError { .. }));
    }

    #[tokio::test]
    async fn test_upload_without_public_flag_skips_acl() {
        let mut source = NamedTempFile::new().unwrap();
        source.write_all(b"hello world").unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_write_object()
            .withf(|bucket, key, _, _| bucket == "test-bucket" && key == "dir/file.bin")
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        store.expect_set_public_read().never();
        store
            .expect_object_attrs()
            .returning(|_, key| Ok(test_attrs(key, 11)));

        let outcome = upload_file(
            &store,
            &test_config(),
            source.path(),
            "dir/file.bin",
            false,
        )
        .await
        .unwrap();

        assert_eq!(outcome.size, 11);
        assert_eq!(outcome.md5, "abcd");
        assert_eq!(
            outcome.url,
            "https://storage.googleapis.com/test-bucket/dir/file.bin"
        );
    }

    #[tokio::test]
    async fn test_public_upload_grants_acl_after_write() {
        let mut source = NamedTempFile::new().unwrap();
        source.write_all(b"data").unwrap();

        let mut seq = Sequence::new();
        let mut store = MockObjectStore::new();
        store
            .expect_write_object()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(()));
        store
            .expect_set_public_read()
            .withf(|bucket, key| bucket == "test-bucket" && key == "k")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        store
            .expect_object_attrs()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, key| Ok(test_attrs(key, 4)));

        upload_file(&store, &test_config(), source.path(), "k", true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_attrs_fetch_failure_propagates() {
        let mut source = NamedTempFile::new().unwrap();
        source.write_all(b"data").unwrap();

        let mut store = MockObjectStore::new();
        store.expect_write_object().returning(|_, _, _, _| Ok(()));
        store.expect_object_attrs().returning(|_, key| {
            Err(GcstashError::attrs_fetch(
                key.to_string(),
                "metadata unavailable".to_string(),
            ))
        });

        let err = upload_file(&store, &test_config(), source.path(), "k", false)
            .await
            .unwrap_err();
        assert!(matches!(err, GcstashError::AttrsFetchError { .. }));
    }
}
