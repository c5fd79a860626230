//! The shared detection heuristic: preprocess, decode, vote, select, score.

use image::{DynamicImage, GrayImage};
use tracing::debug;

use crate::decoder::{RqrrDecoder, SymbolDecoder};
use crate::error::ScanError;
use crate::models::{Candidate, Detection, LocatedCandidate, VoteTally};
use crate::preprocess::{EXTENDED_VARIANTS, FALLBACK_VARIANT, STANDARD_VARIANTS, Variant};

/// Everything a batch-style scan learns about one image.
#[derive(Debug, Clone)]
pub struct ExtendedScan {
    /// Every hit from every variant, duplicates included, for annotation
    pub located: Vec<LocatedCandidate>,
    /// Distinct (value, symbology) pairs in first-seen order
    pub findings: Vec<Candidate>,
    /// Plurality winner with its confidence, when anything was found
    pub winner: Option<Detection>,
    /// Number of variants run, counting the fallback pass when it ran
    pub variants_attempted: usize,
    /// True when the high-contrast fallback pass was run
    pub fallback_used: bool,
}

/// Detection engine: runs preprocessing variants through a symbol decoder
/// and vote-selects the winner.
///
/// The decoder is injected so tests can script outcomes and so a
/// multi-format backend can replace the bundled QR decoder.
pub struct Engine {
    decoder: Box<dyn SymbolDecoder>,
}

impl Engine {
    /// Create an engine with the bundled `rqrr` decoder
    pub fn new() -> Self {
        Self::with_decoder(Box::new(RqrrDecoder::new()))
    }

    /// Create an engine with a caller-supplied decoder
    pub fn with_decoder(decoder: Box<dyn SymbolDecoder>) -> Self {
        Self { decoder }
    }

    /// Decode `bytes` as an image and run the standard three-variant scan.
    ///
    /// # Returns
    /// The plurality winner, `Ok(None)` for a valid image with no readable
    /// barcode, or `Err` when the bytes are not a decodable image.
    pub fn detect_bytes(&self, bytes: &[u8]) -> Result<Option<Detection>, ScanError> {
        let image = image::load_from_memory(bytes)?;
        Ok(self.detect(&image))
    }

    /// Run the standard three-variant scan over an already-decoded image.
    pub fn detect(&self, image: &DynamicImage) -> Option<Detection> {
        let gray = image.to_luma8();
        let (tally, _) = self.run_variants(&gray, STANDARD_VARIANTS);
        let result = tally
            .winner()
            .map(|(winner, votes)| Detection::new(winner, votes, STANDARD_VARIANTS.len()));
        if let Some(detection) = &result {
            debug!(
                value = %detection.value,
                symbology = %detection.symbology,
                confidence = detection.confidence,
                "winner selected"
            );
        }
        result
    }

    /// Batch-style scan: the extended variant set, plus one high-contrast
    /// fallback pass when the main passes find nothing.
    ///
    /// Unlike [`Engine::detect`], this reports every distinct pair found,
    /// not just the winner, together with symbol locations for annotation.
    pub fn scan_extended(&self, image: &DynamicImage) -> ExtendedScan {
        let gray = image.to_luma8();
        let (mut tally, mut located) = self.run_variants(&gray, EXTENDED_VARIANTS);
        let mut variants_attempted = EXTENDED_VARIANTS.len();
        let mut fallback_used = false;

        if located.is_empty() {
            fallback_used = true;
            variants_attempted += 1;
            let hits = self.run_one(&gray, FALLBACK_VARIANT);
            tally.record_variant(hits.iter().map(|hit| hit.candidate.clone()));
            located.extend(hits);
        }

        let winner = tally
            .winner()
            .map(|(winner, votes)| Detection::new(winner, votes, variants_attempted));
        let findings = tally.iter().map(|(candidate, _)| candidate.clone()).collect();

        ExtendedScan {
            located,
            findings,
            winner,
            variants_attempted,
            fallback_used,
        }
    }

    fn run_variants(
        &self,
        gray: &GrayImage,
        variants: &[Variant],
    ) -> (VoteTally, Vec<LocatedCandidate>) {
        let mut tally = VoteTally::new();
        let mut located = Vec::new();
        for variant in variants {
            let hits = self.run_one(gray, *variant);
            tally.record_variant(hits.iter().map(|hit| hit.candidate.clone()));
            located.extend(hits);
        }
        (tally, located)
    }

    fn run_one(&self, gray: &GrayImage, variant: Variant) -> Vec<LocatedCandidate> {
        let transformed = variant.apply(gray);
        let hits = self.decoder.decode(&transformed);
        debug!(variant = variant.name(), hits = hits.len(), "variant decoded");
        hits
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
