//! Turns a [`SymbolMatrix`] into the bytes of the selected output mode.

pub mod svg;
pub mod text;

#[cfg(feature = "png")]
pub mod png;

use tracing::debug;

use crate::error::Result;
use crate::model::{EncodingRequest, OutputMode};
use crate::symbol::{SymbolEncoder, SymbolMatrix};

/// Renders `matrix` fully in memory. Nothing is written until this returns.
pub fn render<E: SymbolEncoder + ?Sized>(
    encoder: &E,
    matrix: &SymbolMatrix,
    request: &EncodingRequest,
    mode: OutputMode,
) -> Result<Vec<u8>> {
    let border = request.border();
    let bytes = match mode {
        OutputMode::Text { ascii } => text::to_text(matrix, border, ascii)?.into_bytes(),
        OutputMode::Png => encoder.rasterize(matrix, request.box_size(), border)?,
        OutputMode::Svg(style) => {
            svg::to_svg_string(matrix, request.box_size(), border, style)?.into_bytes()
        }
    };
    debug!(?mode, bytes = bytes.len(), "rendered artifact");
    Ok(bytes)
}

/// Largest rendered side, border included, in modules.
pub const MAX_SIDE_MODULES: u32 = 4096;

/// Largest PNG side in pixels.
pub const MAX_SIDE_PIXELS: u32 = 16_384;

/// Side length in modules once the border is added on both sides, or `None`
/// past [`MAX_SIDE_MODULES`].
pub(crate) fn dimension(matrix: &SymbolMatrix, border: u32) -> Option<u32> {
    let size = u32::try_from(matrix.size()).ok()?;
    border
        .checked_mul(2)?
        .checked_add(size)
        .filter(|&side| side <= MAX_SIDE_MODULES)
}

/// Border as a signed module offset, for iterating `-border..size + border`.
pub(crate) fn signed_border(border: u32) -> Option<i32> {
    i32::try_from(border).ok()
}
