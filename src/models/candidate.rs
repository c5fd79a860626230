use std::fmt;

use serde::{Serialize, Serializer};

/// Barcode symbology identified alongside decoded text.
///
/// Wire names follow the conventional scanner spellings (`"QRCODE"`,
/// `"EAN13"`, ...). The bundled decoder only ever produces
/// [`Symbology::QrCode`]; the rest of the vocabulary is carried so that a
/// multi-format decoder backend reports through the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// QR code (2D matrix)
    QrCode,
    /// EAN-13 (retail, 13 digits)
    Ean13,
    /// EAN-8 (retail, 8 digits)
    Ean8,
    /// UPC-A (12 digits)
    UpcA,
    /// UPC-E (compressed UPC)
    UpcE,
    /// Code 39 (alphanumeric linear)
    Code39,
    /// Code 93 (compact alphanumeric linear)
    Code93,
    /// Code 128 (full-ASCII linear)
    Code128,
    /// Interleaved 2 of 5 (numeric pairs)
    Interleaved2of5,
    /// Codabar (legacy numeric)
    Codabar,
    /// PDF417 (stacked linear)
    Pdf417,
    /// Data Matrix (2D matrix)
    DataMatrix,
    /// Aztec (2D matrix)
    Aztec,
}

impl Symbology {
    /// Get the wire name for this symbology
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::QrCode => "QRCODE",
            Symbology::Ean13 => "EAN13",
            Symbology::Ean8 => "EAN8",
            Symbology::UpcA => "UPCA",
            Symbology::UpcE => "UPCE",
            Symbology::Code39 => "CODE39",
            Symbology::Code93 => "CODE93",
            Symbology::Code128 => "CODE128",
            Symbology::Interleaved2of5 => "I25",
            Symbology::Codabar => "CODABAR",
            Symbology::Pdf417 => "PDF417",
            Symbology::DataMatrix => "DATAMATRIX",
            Symbology::Aztec => "AZTEC",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Symbology {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A decoded (value, symbology) pair produced by one preprocessing variant.
///
/// The same pair may be produced by several variants; equality on both
/// fields is what the vote tally counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Decoded text content of the symbol
    pub value: String,
    /// Symbology the symbol was encoded in
    pub symbology: Symbology,
}

impl Candidate {
    /// Create a candidate from decoded text and its symbology
    pub fn new(value: impl Into<String>, symbology: Symbology) -> Self {
        Self {
            value: value.into(),
            symbology,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.symbology)
    }
}

/// Axis-aligned bounding rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels (at least 1)
    pub width: u32,
    /// Height in pixels (at least 1)
    pub height: u32,
}

impl Rect {
    /// Smallest rectangle enclosing all of `corners`, or `None` when the
    /// slice is empty. Degenerate spans are widened to 1 pixel.
    pub fn enclosing(corners: &[(i32, i32)]) -> Option<Self> {
        let (first, rest) = corners.split_first()?;
        let (mut min_x, mut min_y) = *first;
        let (mut max_x, mut max_y) = *first;
        for &(x, y) in rest {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Some(Self {
            x: min_x,
            y: min_y,
            width: (max_x - min_x).max(1) as u32,
            height: (max_y - min_y).max(1) as u32,
        })
    }
}

/// A candidate together with where it was found in the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedCandidate {
    /// The decoded pair
    pub candidate: Candidate,
    /// Bounding rectangle of the symbol in the source image
    pub region: Rect,
}

impl LocatedCandidate {
    /// Create a located candidate
    pub fn new(candidate: Candidate, region: Rect) -> Self {
        Self { candidate, region }
    }
}
