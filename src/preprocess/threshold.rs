use image::{GrayImage, Luma};

use super::blur::gaussian_blur;

/// Adaptive threshold against a Gaussian-weighted local mean.
///
/// Each pixel is compared with the mean of its `block_size` neighborhood
/// (Gaussian-weighted, sigma derived from the block size) minus `bias`;
/// brighter pixels become 255, the rest 0. Local thresholding keeps barcode
/// modules separable under uneven lighting where a single global threshold
/// washes out.
///
/// # Arguments
/// * `gray` - Source grayscale image
/// * `block_size` - Neighborhood side length in pixels (odd)
/// * `bias` - Constant subtracted from the local mean
///
/// # Returns
/// Binary image containing only the values 0 and 255
pub fn adaptive_gaussian_threshold(gray: &GrayImage, block_size: u32, bias: f32) -> GrayImage {
    let local_mean = gaussian_blur(gray, block_size, 0.0);
    let (width, height) = gray.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        let src = f32::from(gray.get_pixel(x, y).0[0]);
        let mean = f32::from(local_mean.get_pixel(x, y).0[0]);
        if src > mean - bias {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
