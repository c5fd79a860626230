//! Symbol decoding behind a trait, with an `rqrr`-backed implementation.

use image::GrayImage;
use tracing::trace;

use crate::models::{Candidate, LocatedCandidate, Rect, Symbology};

/// Reads barcode symbols out of one grayscale image.
///
/// Implementations return every symbol they can decode; failures on
/// individual symbols are skipped rather than propagated, since a partial
/// read of a busy image is still useful. The engine calls this once per
/// preprocessing variant.
pub trait SymbolDecoder {
    /// Decode all readable symbols in `gray`
    fn decode(&self, gray: &GrayImage) -> Vec<LocatedCandidate>;
}

/// QR decoder backed by the `rqrr` crate.
///
/// Finds every grid in the image, decodes each, and reports the enclosing
/// axis-aligned rectangle of the grid corners as the symbol region.
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrDecoder;

impl RqrrDecoder {
    /// Create the decoder
    pub fn new() -> Self {
        Self
    }
}

impl SymbolDecoder for RqrrDecoder {
    fn decode(&self, gray: &GrayImage) -> Vec<LocatedCandidate> {
        let mut prepared = rqrr::PreparedImage::prepare(gray.clone());
        let grids = prepared.detect_grids();
        let mut found = Vec::with_capacity(grids.len());
        for grid in &grids {
            match grid.decode() {
                Ok((_, content)) => {
                    let corners: Vec<(i32, i32)> = grid
                        .bounds
                        .iter()
                        .map(|p| (p.x as i32, p.y as i32))
                        .collect();
                    if let Some(region) = Rect::enclosing(&corners) {
                        found.push(LocatedCandidate::new(
                            Candidate::new(content, Symbology::QrCode),
                            region,
                        ));
                    }
                }
                Err(err) => trace!(error = %err, "grid decode failed"),
            }
        }
        found
    }
}
