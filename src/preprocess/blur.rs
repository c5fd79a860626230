use image::{GrayImage, Luma};

/// Sigma used when the caller passes a non-positive value, derived from the
/// kernel size the way the common vision toolkits do it.
fn auto_sigma(ksize: u32) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Build a normalized 1D Gaussian kernel of odd length `ksize`.
pub(crate) fn gaussian_kernel(ksize: u32, sigma: f32) -> Vec<f32> {
    let sigma = if sigma > 0.0 { sigma } else { auto_sigma(ksize) };
    let radius = (ksize / 2) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

/// Gaussian blur with a separable `ksize` x `ksize` kernel.
///
/// `ksize` must be odd. A non-positive `sigma` selects one automatically
/// from the kernel size. Edges are handled by clamping sample coordinates
/// into the image.
///
/// # Arguments
/// * `gray` - Source grayscale image
/// * `ksize` - Kernel side length in pixels (odd)
/// * `sigma` - Gaussian standard deviation, or <= 0.0 for automatic
///
/// # Returns
/// Blurred image with the same dimensions
pub fn gaussian_blur(gray: &GrayImage, ksize: u32, sigma: f32) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 || ksize <= 1 {
        return gray.clone();
    }

    let kernel = gaussian_kernel(ksize, sigma);
    let radius = (kernel.len() / 2) as i64;
    let src = gray.as_raw();
    let w = width as i64;
    let h = height as i64;

    // Horizontal pass into a float buffer to avoid double quantization
    let mut rows = vec![0.0f32; src.len()];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = (x + k as i64 - radius).clamp(0, w - 1);
                acc += f32::from(src[(y * w + sx) as usize]) * weight;
            }
            rows[(y * w + x) as usize] = acc;
        }
    }

    // Vertical pass
    GrayImage::from_fn(width, height, |x, y| {
        let mut acc = 0.0f32;
        for (k, weight) in kernel.iter().enumerate() {
            let sy = (i64::from(y) + k as i64 - radius).clamp(0, h - 1);
            acc += rows[(sy * w + i64::from(x)) as usize] * weight;
        }
        Luma([acc.round().clamp(0.0, 255.0) as u8])
    })
}
