//! The encoder boundary.
//!
//! `qrcli` never builds QR symbols itself. A [`SymbolEncoder`] turns text into a
//! [`SymbolMatrix`] and may optionally rasterize that matrix to PNG bytes. The
//! default encoder wraps the `qrcode` crate.

use qrcode::{EcLevel, QrCode, Version};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::ErrorCorrection;

/// A QR Code symbol as a square grid of dark and light modules.
///
/// The grid holds the symbol only; the quiet zone is added by renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolMatrix {
    /// Width and height in modules, between 21 and 177 (inclusive).
    size: i32,
    /// Row-major, `true` = dark.
    modules: Vec<bool>,
    version: u8,
}

impl SymbolMatrix {
    /// Builds a matrix from row-major modules. `modules.len()` must equal `size * size`.
    pub fn from_modules(size: usize, modules: Vec<bool>, version: u8) -> Result<Self> {
        if modules.len() != size * size {
            return Err(Error::Encode(format!(
                "module grid of {} cells is not {size}x{size}",
                modules.len()
            )));
        }
        let size = i32::try_from(size)
            .map_err(|_| Error::Encode(format!("module grid side {size} is too large")))?;
        Ok(Self {
            size,
            modules,
            version,
        })
    }

    /// Width and height of the symbol in modules.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// QR version (1-40) chosen by the encoder.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the color of the module at the given coordinates, `true` for dark.
    /// Coordinates outside the symbol, including negative ones, are light.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x)
            && (0..self.size).contains(&y)
            && self.modules[(y * self.size + x) as usize]
    }

    /// Number of dark modules in the symbol.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }
}

/// Capability interface over a QR encoding library.
pub trait SymbolEncoder {
    /// Encodes `text` at the given error correction level, choosing the
    /// smallest version that fits.
    fn encode(&self, text: &str, level: ErrorCorrection) -> Result<SymbolMatrix>;

    /// Renders `matrix` as PNG bytes, `box_size` pixels per module with
    /// `border` light modules on every side.
    ///
    /// Encoders without imaging support keep this default, which reports a
    /// [`Error::Capability`].
    fn rasterize(&self, matrix: &SymbolMatrix, box_size: u32, border: u32) -> Result<Vec<u8>> {
        let _ = (matrix, box_size, border);
        Err(Error::png_unavailable())
    }
}

/// [`SymbolEncoder`] backed by the `qrcode` crate, with PNG support when the
/// `png` feature is enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrcodeEncoder;

impl SymbolEncoder for QrcodeEncoder {
    fn encode(&self, text: &str, level: ErrorCorrection) -> Result<SymbolMatrix> {
        let ec = match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        };
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec)
            .map_err(|e| Error::Encode(e.to_string()))?;
        let version = match code.version() {
            Version::Normal(v) | Version::Micro(v) => v as u8,
        };
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();
        let matrix = SymbolMatrix::from_modules(code.width(), modules, version)?;
        debug!(
            version = matrix.version(),
            size = matrix.size(),
            ?level,
            "encoded symbol"
        );
        Ok(matrix)
    }

    fn rasterize(&self, matrix: &SymbolMatrix, box_size: u32, border: u32) -> Result<Vec<u8>> {
        #[cfg(feature = "png")]
        {
            crate::render::png::encode_png(matrix, box_size, border)
        }

        #[cfg(not(feature = "png"))]
        {
            let _ = (matrix, box_size, border);
            Err(Error::png_unavailable())
        }
    }
}
