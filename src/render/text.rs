//! Terminal renderers.

use crate::error::{Error, Result};
use crate::symbol::SymbolMatrix;

/// Renders the symbol plus `border` light modules as terminal text.
///
/// The default packs two module rows into each line with half-block glyphs.
/// With `ascii` set, each module becomes two characters (`##` dark, two spaces
/// light) so cells stay roughly square in a monospaced font.
/// The string always uses Unix newlines (\n) and ends with one.
pub fn to_text(matrix: &SymbolMatrix, border: u32, ascii: bool) -> Result<String> {
    let border = super::dimension(matrix, border)
        .and_then(|_| super::signed_border(border))
        .ok_or_else(|| Error::Render(format!("border of {border} modules is too large")))?;
    Ok(if ascii {
        ascii_rows(matrix, border)
    } else {
        half_block_rows(matrix, border)
    })
}

fn ascii_rows(matrix: &SymbolMatrix, border: i32) -> String {
    let mut result = String::new();
    for y in -border..matrix.size() + border {
        for x in -border..matrix.size() + border {
            result += if matrix.get_module(x, y) { "##" } else { "  " };
        }
        result.push('\n');
    }
    result
}

fn half_block_rows(matrix: &SymbolMatrix, border: i32) -> String {
    let mut result = String::new();
    let mut y = -border;
    while y < matrix.size() + border {
        for x in -border..matrix.size() + border {
            let top = matrix.get_module(x, y);
            // Past the last row reads as light.
            let bottom = y + 1 < matrix.size() + border && matrix.get_module(x, y + 1);
            result.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        result.push('\n');
        y += 2;
    }
    result
}
