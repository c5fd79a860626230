//! Object storage behind a trait so the request handler never builds its
//! own client and tests can substitute a fake.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::StorageError;

/// Fetches raw object bytes by bucket and key.
pub trait ObjectStore {
    /// Fetch the object's bytes
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;
}

/// Object store over a local directory tree, resolving
/// `<root>/<bucket>/<key>`.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ObjectStore for FsObjectStore {
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.root.join(bucket).join(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(StorageError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_reads_object_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let bucket_dir = dir.path().join("uploads");
        fs::create_dir(&bucket_dir).unwrap();
        fs::write(bucket_dir.join("photo.png"), b"pixels").unwrap();

        let store = FsObjectStore::new(dir.path());
        let bytes = store.fetch("uploads", "photo.png").unwrap();
        assert_eq!(bytes, b"pixels");
    }

    #[test]
    fn test_fetch_missing_object_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());
        let err = store.fetch("uploads", "missing.png").unwrap_err();
        match err {
            StorageError::NotFound { bucket, key } => {
                assert_eq!(bucket, "uploads");
                assert_eq!(key, "missing.png");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_nested_key_path() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads").join("2024").join("06");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("scan.jpg"), b"jpeg").unwrap();

        let store = FsObjectStore::new(dir.path());
        let bytes = store.fetch("uploads", "2024/06/scan.jpg").unwrap();
        assert_eq!(bytes, b"jpeg");
    }
}
