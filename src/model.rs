//! Request and mode types shared by the pipeline stages.

use clap::ValueEnum;

use crate::error::{Error, Result};

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum ErrorCorrection {
    /// Tolerates ~7% erroneous codewords.
    L,
    /// Tolerates ~15% erroneous codewords.
    #[default]
    M,
    /// Tolerates ~25% erroneous codewords.
    Q,
    /// Tolerates ~30% erroneous codewords.
    H,
}

/// How an SVG document draws the dark modules.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum SvgStyle {
    /// One compound `<path>`: fewest elements, smallest file.
    #[default]
    Path,
    /// One `<rect>` per dark module.
    Rect,
    /// A `<symbol>` definition referenced once, for embedding in other documents.
    Frag,
}

/// The single rendering mode selected for an invocation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputMode {
    Text { ascii: bool },
    Png,
    Svg(SvgStyle),
}

impl OutputMode {
    /// Extension used when the destination is derived from the input text.
    /// Text output has no derived file.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Text { .. } => None,
            Self::Png => Some("png"),
            Self::Svg(_) => Some("svg"),
        }
    }
}

/// What to encode and at which geometry. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingRequest {
    text: String,
    level: ErrorCorrection,
    box_size: u32,
    border: u32,
}

impl EncodingRequest {
    pub const DEFAULT_BOX_SIZE: u32 = 10;
    pub const DEFAULT_BORDER: u32 = 4;

    pub fn new(
        text: impl Into<String>,
        level: ErrorCorrection,
        box_size: u32,
        border: u32,
    ) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::Usage("input text must not be empty".into()));
        }
        if box_size == 0 {
            return Err(Error::Usage("box size must be a positive integer".into()));
        }
        Ok(Self {
            text,
            level,
            box_size,
            border,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> ErrorCorrection {
        self.level
    }

    /// Pixels per module for raster output and SVG width/height.
    pub fn box_size(&self) -> u32 {
        self.box_size
    }

    /// Quiet-zone width in modules on every side.
    pub fn border(&self) -> u32 {
        self.border
    }
}
