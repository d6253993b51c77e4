//! PNG rasterization, available with the `png` feature.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};

use crate::error::{Error, Result};
use crate::symbol::SymbolMatrix;

/// Converts a QR Code matrix to an 8-bit grayscale PNG.
///
/// Each module is `box_size` pixels square and the symbol is padded by
/// `border` light modules, so the image side is `(size + 2 * border) * box_size`.
pub fn encode_png(matrix: &SymbolMatrix, box_size: u32, border: u32) -> Result<Vec<u8>> {
    let img = to_image(matrix, box_size, border)?;
    let mut png_bytes = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| Error::Render(e.to_string()))?;
    Ok(png_bytes)
}

fn to_image(matrix: &SymbolMatrix, box_size: u32, border: u32) -> Result<GrayImage> {
    let overflow = || Error::Render(format!("image of border {border} at box size {box_size} is too large"));
    let side = super::dimension(matrix, border)
        .and_then(|d| d.checked_mul(box_size))
        .filter(|&side| side <= super::MAX_SIDE_PIXELS)
        .ok_or_else(overflow)?;
    let border = super::signed_border(border).ok_or_else(overflow)?;

    let mut img = GrayImage::from_pixel(side, side, Luma([255u8]));
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let qr_x = (x / box_size) as i32 - border;
        let qr_y = (y / box_size) as i32 - border;
        if matrix.get_module(qr_x, qr_y) {
            *pixel = Luma([0u8]);
        }
    }
    Ok(img)
}
