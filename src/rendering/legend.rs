//! Color list rendering: one swatch and description line per palette entry.

use stitch_quant::PaletteEntry;

use crate::rendering::canvas::SvgCanvas;

const WIDTH: u32 = 400;
const HEADER_HEIGHT: u32 = 100;
const ENTRY_HEIGHT: u32 = 60;
const SWATCH_SIZE: u32 = 50;

/// Render the palette as a color list SVG document.
///
/// Entries are drawn in palette order, so the list reads top to bottom in
/// ascending id order.
pub fn legend_svg(palette: &[PaletteEntry]) -> String {
    let height = HEADER_HEIGHT + palette.len() as u32 * ENTRY_HEIGHT;
    let mut canvas = SvgCanvas::new(WIDTH, height);

    canvas.text_left(20, 32, 24, "black", "Color List");

    for (i, entry) in palette.iter().enumerate() {
        let top = (80 + i as u32 * ENTRY_HEIGHT) as i32;
        canvas.rect(
            20,
            top,
            SWATCH_SIZE,
            SWATCH_SIZE,
            Some(&entry.rgb.to_hex()),
            Some("black"),
            1,
        );
        canvas.text_left(
            90,
            top + 23,
            16,
            "black",
            &format!("Color {}: {}", entry.id, entry.rgb),
        );
    }

    canvas.into_svg()
}
