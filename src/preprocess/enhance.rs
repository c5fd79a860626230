use image::{GrayImage, Luma};

/// 3x3 sharpening kernel: center 9, all neighbors -1 (sums to 1, so flat
/// regions pass through unchanged while edges gain contrast).
const SHARPEN_KERNEL: [[f32; 3]; 3] = [
    [-1.0, -1.0, -1.0],
    [-1.0, 9.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// Sharpen edges with a 3x3 convolution.
///
/// Edge pixels clamp their sample coordinates into the image; output values
/// saturate into 0..=255.
pub fn sharpen(gray: &GrayImage) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return gray.clone();
    }
    let w = width as i64;
    let h = height as i64;
    let src = gray.as_raw();

    GrayImage::from_fn(width, height, |x, y| {
        let mut acc = 0.0f32;
        for (ky, row) in SHARPEN_KERNEL.iter().enumerate() {
            let sy = (i64::from(y) + ky as i64 - 1).clamp(0, h - 1);
            for (kx, weight) in row.iter().enumerate() {
                let sx = (i64::from(x) + kx as i64 - 1).clamp(0, w - 1);
                acc += f32::from(src[(sy * w + sx) as usize]) * weight;
            }
        }
        Luma([acc.round().clamp(0.0, 255.0) as u8])
    })
}

/// Scale every pixel by `gain`, saturating at 255.
///
/// A gain of 2.0 doubles intensity, pushing mid-tones toward white while
/// dark modules stay dark; useful as a last-resort pass on washed-out
/// low-contrast images.
pub fn boost_contrast(gray: &GrayImage, gain: f32) -> GrayImage {
    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = (f32::from(pixel.0[0]) * gain).round().clamp(0.0, 255.0) as u8;
    }
    out
}
