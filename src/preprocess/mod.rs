//! Preprocessing variants applied to the grayscale image before decoding.
//!
//! Decoding is attempted once per variant; the vote tally then rewards
//! (value, symbology) pairs that survive several different transforms.

pub mod blur;
pub mod enhance;
pub mod threshold;

use image::GrayImage;

pub use blur::gaussian_blur;
pub use enhance::{boost_contrast, sharpen};
pub use threshold::adaptive_gaussian_threshold;

/// Neighborhood side length for the adaptive threshold variant
const THRESHOLD_BLOCK: u32 = 11;
/// Bias subtracted from the local mean in the adaptive threshold variant
const THRESHOLD_BIAS: f32 = 2.0;
/// Kernel side length for the blur variant
const BLUR_KERNEL: u32 = 5;
/// Intensity gain for the high-contrast variant
const CONTRAST_GAIN: f32 = 2.0;

/// One named preprocessing transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Grayscale input as-is
    Original,
    /// Adaptive Gaussian threshold (block 11, bias 2) to a binary image
    AdaptiveThreshold,
    /// 5x5 Gaussian blur, sigma derived from the kernel size
    GaussianBlur,
    /// 3x3 edge sharpening
    Sharpen,
    /// Saturating 2x intensity boost
    HighContrast,
}

impl Variant {
    /// Stable name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Original => "original",
            Variant::AdaptiveThreshold => "adaptive-threshold",
            Variant::GaussianBlur => "gaussian-blur",
            Variant::Sharpen => "sharpen",
            Variant::HighContrast => "high-contrast",
        }
    }

    /// Apply this transform to a grayscale image
    pub fn apply(&self, gray: &GrayImage) -> GrayImage {
        match self {
            Variant::Original => gray.clone(),
            Variant::AdaptiveThreshold => {
                adaptive_gaussian_threshold(gray, THRESHOLD_BLOCK, THRESHOLD_BIAS)
            }
            Variant::GaussianBlur => gaussian_blur(gray, BLUR_KERNEL, 0.0),
            Variant::Sharpen => sharpen(gray),
            Variant::HighContrast => boost_contrast(gray, CONTRAST_GAIN),
        }
    }
}

/// Variants tried by the request-handler path, in vote-priority order.
/// The order doubles as the tie-break for equal vote counts.
pub const STANDARD_VARIANTS: &[Variant] = &[
    Variant::Original,
    Variant::AdaptiveThreshold,
    Variant::GaussianBlur,
];

/// Variants tried per file by the batch path: the standard three plus a
/// sharpening pass.
pub const EXTENDED_VARIANTS: &[Variant] = &[
    Variant::Original,
    Variant::AdaptiveThreshold,
    Variant::GaussianBlur,
    Variant::Sharpen,
];

/// Extra pass the batch path runs when the extended set finds nothing.
pub const FALLBACK_VARIANT: Variant = Variant::HighContrast;
