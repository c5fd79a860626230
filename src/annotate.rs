//! Drawing boxes and labels over located barcodes.

use ab_glyph::FontVec;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect as PixelRect;
use tracing::debug;

use crate::models::LocatedCandidate;

/// Box outline and label color (green)
const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
/// Box outline thickness in pixels
const BOX_THICKNESS: i32 = 2;
/// Label text height in pixels
const LABEL_SCALE: f32 = 16.0;
/// Font files probed when `BARSCAN_FONT` is not set
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Draws a hollow rectangle and a `value (SYMBOLOGY)` label for each
/// located barcode.
pub struct Annotator {
    font: Option<FontVec>,
}

impl Annotator {
    /// Create an annotator that draws boxes only
    pub fn boxes_only() -> Self {
        Self { font: None }
    }

    /// Create an annotator with a label font.
    ///
    /// The `BARSCAN_FONT` environment variable is probed first, then the
    /// usual system font locations. When nothing loads, boxes are still
    /// drawn and labels are skipped.
    pub fn with_system_font() -> Self {
        let mut candidates: Vec<String> = Vec::new();
        if let Ok(path) = std::env::var("BARSCAN_FONT") {
            candidates.push(path);
        }
        candidates.extend(FONT_PATHS.iter().map(|path| (*path).to_string()));

        for path in &candidates {
            if let Ok(data) = std::fs::read(path) {
                if let Ok(font) = FontVec::try_from_vec(data) {
                    debug!(path = %path, "annotation font loaded");
                    return Self { font: Some(font) };
                }
            }
        }
        debug!("no annotation font found, labels disabled");
        Self { font: None }
    }

    /// Whether labels will be drawn
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Draw a box (and label, when a font is loaded) for every hit.
    pub fn draw(&self, canvas: &mut RgbImage, hits: &[LocatedCandidate]) {
        for hit in hits {
            self.draw_box(canvas, hit);
            if let Some(font) = &self.font {
                let label = hit.candidate.to_string();
                let region = hit.region;
                let label_height = LABEL_SCALE as i32;
                // Above the box when there is room, tucked inside otherwise
                let label_y = if region.y >= label_height + 4 {
                    region.y - label_height - 4
                } else {
                    region.y + 4
                };
                let label_x = region.x.max(0);
                draw_text_mut(canvas, BOX_COLOR, label_x, label_y, LABEL_SCALE, font, &label);
            }
        }
    }

    fn draw_box(&self, canvas: &mut RgbImage, hit: &LocatedCandidate) {
        let region = hit.region;
        for inset in 0..BOX_THICKNESS {
            let width = region.width as i64 - 2 * i64::from(inset);
            let height = region.height as i64 - 2 * i64::from(inset);
            if width < 1 || height < 1 {
                break;
            }
            let rect = PixelRect::at(region.x + inset, region.y + inset)
                .of_size(width as u32, height as u32);
            draw_hollow_rect_mut(canvas, rect, BOX_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Rect, Symbology};

    fn hit_at(x: i32, y: i32, width: u32, height: u32) -> LocatedCandidate {
        LocatedCandidate::new(
            Candidate::new("test", Symbology::QrCode),
            Rect {
                x,
                y,
                width,
                height,
            },
        )
    }

    #[test]
    fn test_draw_outlines_the_region() {
        let mut canvas = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
        Annotator::boxes_only().draw(&mut canvas, &[hit_at(10, 10, 30, 20)]);

        assert_eq!(*canvas.get_pixel(10, 10), BOX_COLOR, "outer corner");
        assert_eq!(*canvas.get_pixel(25, 10), BOX_COLOR, "top edge");
        assert_eq!(*canvas.get_pixel(25, 11), BOX_COLOR, "thickness row");
        assert_eq!(
            *canvas.get_pixel(25, 20),
            Rgb([0, 0, 0]),
            "interior stays untouched"
        );
    }

    #[test]
    fn test_draw_handles_region_leaving_the_canvas() {
        let mut canvas = RgbImage::from_pixel(32, 32, Rgb([0, 0, 0]));
        // Partially outside on two sides; must not panic
        Annotator::boxes_only().draw(&mut canvas, &[hit_at(-5, 20, 20, 40)]);
        assert_eq!(*canvas.get_pixel(5, 20), BOX_COLOR);
    }

    #[test]
    fn test_draw_handles_tiny_region() {
        let mut canvas = RgbImage::from_pixel(16, 16, Rgb([0, 0, 0]));
        Annotator::boxes_only().draw(&mut canvas, &[hit_at(4, 4, 2, 2)]);
        assert_eq!(*canvas.get_pixel(4, 4), BOX_COLOR);
    }

    #[test]
    fn test_boxes_only_reports_no_font() {
        assert!(!Annotator::boxes_only().has_font());
    }
}
