//! barscan - barcode detection for still images
//!
//! Runs a fixed, ordered set of preprocessing variants (grayscale,
//! adaptive threshold, blur, sharpen, contrast boost) through a barcode
//! decoder, tallies which (value, symbology) pair survives the most
//! variants, and reports the plurality winner with a vote-ratio
//! confidence. The same heuristic backs a batch directory scanner with
//! annotated output images and a JSON request handler.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Drawing boxes and labels over located barcodes
pub mod annotate;
/// Directory batch scanning with annotated outputs
pub mod batch;
/// Symbol decoding trait and the bundled rqrr backend
pub mod decoder;
/// The preprocess-decode-vote detection engine
pub mod engine;
/// Error types (scan, storage, processing, batch)
pub mod error;
/// Request handling (JSON events in, fixed envelopes out)
pub mod handler;
/// Core data structures (candidates, vote tally, detection results)
pub mod models;
/// Preprocessing variants applied before decoding
pub mod preprocess;
/// Object storage access behind a trait
pub mod storage;

pub use engine::{Engine, ExtendedScan};
pub use error::{BatchError, ProcessingError, ScanError, StorageError};
pub use models::{Candidate, Detection, LocatedCandidate, Rect, Symbology, VoteTally};

/// Detect the most likely barcode in raw image bytes.
///
/// Convenience wrapper over [`Engine::detect_bytes`] with the bundled
/// decoder and the standard three-variant scan.
///
/// # Arguments
/// * `bytes` - Encoded image bytes (PNG, JPEG, ...)
///
/// # Returns
/// The plurality winner with its confidence, `Ok(None)` when the image is
/// valid but carries no readable barcode, or `Err` when the bytes are not
/// a decodable image.
pub fn detect(bytes: &[u8]) -> Result<Option<Detection>, ScanError> {
    Engine::new().detect_bytes(bytes)
}
