//! Upload result models
//!
//! The final report of a completed upload, built from the attributes the
//! store returns after the write is finalized.

use crate::storage::ObjectAttrs;
use serde::Serialize;
use tabled::Tabled;

/// Public URL of an object.
pub fn object_url(bucket: &str, key: &str) -> String {
    format!("https://storage.googleapis.com/{bucket}/{key}")
}

/// Report of a completed upload.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct UploadOutcome {
    #[tabled(rename = "Bucket")]
    pub bucket: String,
    #[tabled(rename = "Object")]
    pub key: String,
    #[tabled(rename = "URL")]
    pub url: String,
    #[tabled(rename = "Size")]
    pub size: u64,
    #[tabled(rename = "MD5")]
    pub md5: String,
}

impl UploadOutcome {
    /// Build the report from fetched object attributes. The MD5 renders
    /// as lowercase hex, or empty when the service reported none.
    pub fn from_attrs(attrs: &ObjectAttrs) -> Self {
        Self {
            bucket: attrs.bucket.clone(),
            key: attrs.name.clone(),
            url: object_url(&attrs.bucket, &attrs.name),
            size: attrs.size,
            md5: hex::encode(&attrs.md5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_form() {
        assert_eq!(
            object_url("my-bucket", "2026August5/photo.png"),
            "https://storage.googleapis.com/my-bucket/2026August5/photo.png"
        );
    }

    #[test]
    fn test_outcome_from_attrs() {
        let attrs = ObjectAttrs {
            bucket: "my-bucket".to_string(),
            name: "2026August5/photo.png".to_string(),
            size: 100,
            md5: vec![0xde, 0xad, 0xbe, 0xef],
        };

        let outcome = UploadOutcome::from_attrs(&attrs);
        assert_eq!(outcome.bucket, "my-bucket");
        assert_eq!(outcome.key, "2026August5/photo.png");
        assert_eq!(
            outcome.url,
            "https://storage.googleapis.com/my-bucket/2026August5/photo.png"
        );
        assert_eq!(outcome.size, 100);
        assert_eq!(outcome.md5, "deadbeef");
    }

    #[test]
    fn test_outcome_without_md5() {
        let attrs = ObjectAttrs {
            bucket: "b".to_string(),
            name: "k".to_string(),
            size: 0,
            md5: Vec::new(),
        };

        assert_eq!(UploadOutcome::from_attrs(&attrs).md5, "");
    }
}
