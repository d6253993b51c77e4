//! Artifacts decode back to their input with an independent QR reader.

use qrcli::model::ErrorCorrection;
use qrcli::render::text::to_text;
use qrcli::symbol::{QrcodeEncoder, SymbolEncoder};

const INPUTS: &[&str] = &[
    "https://example.com",
    "Hello World",
    "WIFI:S:MyNet;T:WPA;P:s3cr3t;;",
    "0123456789",
];

const LEVELS: [ErrorCorrection; 4] = [
    ErrorCorrection::L,
    ErrorCorrection::M,
    ErrorCorrection::Q,
    ErrorCorrection::H,
];

fn decode(width: usize, height: usize, pixel: impl FnMut(usize, usize) -> u8) -> String {
    let mut img = rqrr::PreparedImage::prepare_from_greyscale(width, height, pixel);
    let grids = img.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code");
    let (_meta, content) = grids[0].decode().expect("decodable QR code");
    content
}

#[cfg(feature = "png")]
#[test]
fn png_round_trips_at_every_level() {
    for &input in INPUTS {
        for level in LEVELS {
            let matrix = QrcodeEncoder.encode(input, level).expect("encodable");
            let bytes = QrcodeEncoder.rasterize(&matrix, 4, 4).expect("rasterized");
            let img = image::load_from_memory(&bytes).expect("valid png").to_luma8();
            let (w, h) = img.dimensions();
            let decoded = decode(w as usize, h as usize, |x, y| img.get_pixel(x as u32, y as u32)[0]);
            assert_eq!(decoded, input, "level {level:?}");
        }
    }
}

#[cfg(feature = "png")]
#[test]
fn png_round_trips_non_ascii_text() {
    let input = "Grüße aus Köln";
    let matrix = QrcodeEncoder.encode(input, ErrorCorrection::M).expect("encodable");
    let bytes = QrcodeEncoder.rasterize(&matrix, 5, 4).expect("rasterized");
    let img = image::load_from_memory(&bytes).expect("valid png").to_luma8();
    let (w, h) = img.dimensions();
    let decoded = decode(w as usize, h as usize, |x, y| img.get_pixel(x as u32, y as u32)[0]);
    assert_eq!(decoded, input);
}

/// Pixels per module when scanning a text rendering.
const SCALE: usize = 4;

#[test]
fn ascii_text_round_trips() {
    for &input in INPUTS {
        let matrix = QrcodeEncoder.encode(input, ErrorCorrection::M).expect("encodable");
        let text = to_text(&matrix, 4, true).expect("rendered");
        let rows: Vec<&[u8]> = text.lines().map(str::as_bytes).collect();
        let side = rows.len();
        let decoded = decode(side * SCALE, side * SCALE, |x, y| {
            if rows[y / SCALE][(x / SCALE) * 2] == b'#' {
                0
            } else {
                255
            }
        });
        assert_eq!(decoded, input);
    }
}

#[test]
fn half_block_text_round_trips() {
    for &input in INPUTS {
        let matrix = QrcodeEncoder.encode(input, ErrorCorrection::Q).expect("encodable");
        let text = to_text(&matrix, 4, false).expect("rendered");
        let rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        let width = rows[0].len();
        let height = rows.len() * 2;
        let decoded = decode(width * SCALE, height * SCALE, |x, y| {
            let module_y = y / SCALE;
            let glyph = rows[module_y / 2][x / SCALE];
            let dark = match glyph {
                '█' => true,
                '▀' => module_y % 2 == 0,
                '▄' => module_y % 2 == 1,
                _ => false,
            };
            if dark {
                0
            } else {
                255
            }
        });
        assert_eq!(decoded, input);
    }
}

