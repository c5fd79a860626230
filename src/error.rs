//! Error types for scanning, storage access, and request processing.

use thiserror::Error;

/// Errors raised by the detection engine.
///
/// A valid image that simply contains no barcode is *not* an error; the
/// engine reports that case as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The supplied bytes could not be decoded as an image.
    #[error("image decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),
}

/// Errors raised when fetching image bytes from an object store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No object exists under the requested bucket and key.
    #[error("object not found: {bucket}/{key}")]
    NotFound {
        /// Bucket that was queried.
        bucket: String,
        /// Key that was queried.
        key: String,
    },
    /// The store failed while reading the object.
    #[error("storage read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures the request handler collapses into a generic 500 response.
///
/// The variants are kept for logging; none of their detail reaches the
/// response body.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The inline payload was not valid base64.
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The referenced object could not be fetched.
    #[error("storage fetch failed: {0}")]
    Storage(#[from] StorageError),
    /// The engine rejected the image bytes.
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),
}

/// Per-file failures during a batch run. The runner reports these and moves
/// on to the next file.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The file could not be read or decoded as an image.
    #[error("image load failed: {0}")]
    Load(#[source] image::ImageError),
    /// The annotated output image could not be written.
    #[error("annotated output save failed: {0}")]
    Save(#[source] image::ImageError),
}
