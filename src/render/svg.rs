use crate::error::{Error, Result};
use crate::model::SvgStyle;
use crate::symbol::SymbolMatrix;

const XML_PROLOG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const SYMBOL_ID: &str = "qrcode";

// Returns a string of SVG code for an image depicting the given QR Code, with
// the given number of border modules. The viewBox is in module units and the
// width/height attributes scale it by `box_size`.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(
    matrix: &SymbolMatrix,
    box_size: u32,
    border: u32,
    style: SvgStyle,
) -> Result<String> {
    let overflow = || Error::Render(format!("SVG of border {border} at box size {box_size} is too large"));
    let dimension = super::dimension(matrix, border).ok_or_else(overflow)?;
    let pixels = dimension.checked_mul(box_size).ok_or_else(overflow)?;
    let border = super::signed_border(border).ok_or_else(overflow)?;

    let mut result = String::new();
    match style {
        SvgStyle::Path => {
            result += XML_PROLOG;
            result += &svg_open(pixels, dimension);
            result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
            result += &format!("\t<path d=\"{}\" fill=\"#000000\"/>\n", path_data(matrix, border));
        }
        SvgStyle::Rect => {
            result += XML_PROLOG;
            result += &svg_open(pixels, dimension);
            for y in 0..matrix.size() {
                for x in 0..matrix.size() {
                    if matrix.get_module(x, y) {
                        result += &format!(
                            "\t<rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" fill=\"#000000\"/>\n",
                            x + border,
                            y + border
                        );
                    }
                }
            }
        }
        SvgStyle::Frag => {
            result += &svg_open(pixels, dimension);
            result += "\t<defs>\n";
            result += &format!("\t\t<symbol id=\"{SYMBOL_ID}\" viewBox=\"0 0 {dimension} {dimension}\">\n");
            result += &format!("\t\t\t<path d=\"{}\" fill=\"#000000\"/>\n", path_data(matrix, border));
            result += "\t\t</symbol>\n";
            result += "\t</defs>\n";
            result += &format!("\t<use href=\"#{SYMBOL_ID}\" width=\"{pixels}\" height=\"{pixels}\"/>\n");
        }
    }
    result += "</svg>\n";
    Ok(result)
}

fn svg_open(pixels: u32, dimension: u32) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{pixels}\" height=\"{pixels}\" viewBox=\"0 0 {dimension} {dimension}\" stroke=\"none\">\n"
    )
}

/// Path commands for every dark module, merging horizontal runs into one box.
fn path_data(matrix: &SymbolMatrix, border: i32) -> String {
    let mut result = String::new();
    for y in 0..matrix.size() {
        let mut x = 0;
        while x < matrix.size() {
            if !matrix.get_module(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while matrix.get_module(x, y) {
                x += 1;
            }
            let run = x - start;
            if !result.is_empty() {
                result += " ";
            }
            result += &format!("M{},{}h{run}v1h-{run}z", start + border, y + border);
        }
    }
    result
}
