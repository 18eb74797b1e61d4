//! Stitch chart rendering.
//!
//! A chart draws the label grid as colored cells inside a margin, with
//! row numbers along the right edge and column numbers along the bottom.
//! Both axes count AWAY from the bottom-right corner: row 1 is the bottom
//! row and column 1 is the rightmost column, which is the order the
//! stitches are worked in.

use stitch_quant::Pattern;

use crate::rendering::canvas::SvgCanvas;

/// Axis tick length in pixels.
const TICK_LEN: i32 = 5;

/// Layout parameters for a chart rendering.
///
/// Two presets exist: [`ChartOptions::preview`] for the compact on-screen
/// chart and [`ChartOptions::export`] for the printable one. They differ
/// in cell size, label treatment, and whether a full grid overlay is
/// drawn.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Cell edge length in pixels.
    pub scale: u32,
    /// Blank space on the top, left, and right of the grid.
    pub margin: u32,
    /// Extra blank space below the grid for column labels.
    pub bottom_margin: u32,
    /// Draw palette ids inside the cells.
    pub show_numbers: bool,
    /// Draw grid lines over every cell boundary.
    pub grid_lines: bool,
    /// Draw short tick marks next to the row labels.
    pub row_ticks: bool,
    /// Stroke width of the outer border.
    pub border_width: u32,
    /// How far the outer border sits outside the grid.
    pub border_outset: u32,
    /// Stroke width of grid lines and column ticks.
    pub line_width: u32,
    /// Font size of the axis labels.
    pub label_font: u32,
    /// Horizontal gap between the grid edge and the row labels.
    pub label_gap_x: u32,
    /// Vertical gap between the grid edge and the column labels.
    pub label_gap_y: u32,
    /// Cell number font size as a fraction of `scale`.
    pub number_ratio: f32,
    /// Padding around cell numbers on their white backing patch.
    pub number_padding: u32,
}

impl ChartOptions {
    /// Compact chart for the browser preview.
    pub fn preview(show_numbers: bool) -> Self {
        Self {
            scale: 20,
            margin: 80,
            bottom_margin: 50,
            show_numbers,
            grid_lines: false,
            row_ticks: true,
            border_width: 2,
            border_outset: 0,
            line_width: 1,
            label_font: 10,
            label_gap_x: 10,
            label_gap_y: 8,
            number_ratio: 0.4,
            number_padding: 2,
        }
    }

    /// Large-cell chart for printing, with a full grid overlay.
    pub fn export(show_numbers: bool) -> Self {
        Self {
            scale: 30,
            margin: 100,
            bottom_margin: 50,
            show_numbers,
            grid_lines: true,
            row_ticks: false,
            border_width: 3,
            border_outset: 3,
            line_width: 2,
            label_font: 16,
            label_gap_x: 15,
            label_gap_y: 10,
            number_ratio: 0.5,
            number_padding: 3,
        }
    }
}

/// Render a pattern as a chart SVG document.
pub fn chart_svg(pattern: &Pattern, options: &ChartOptions) -> String {
    let scale = options.scale;
    let margin = options.margin;
    let grid_w = pattern.width() * scale;
    let grid_h = pattern.height() * scale;

    let mut canvas = SvgCanvas::new(
        grid_w + 2 * margin,
        grid_h + margin + options.bottom_margin,
    );

    for y in 0..pattern.height() {
        for x in 0..pattern.width() {
            let hex = pattern.rgb_at(x, y).to_hex();
            canvas.rect(
                (x * scale + margin) as i32,
                (y * scale + margin) as i32,
                scale,
                scale,
                Some(&hex),
                Some("black"),
                1,
            );
        }
    }

    if options.grid_lines {
        let top = margin as i32;
        let left = margin as i32;
        for x in 0..=pattern.width() {
            let px = (margin + x * scale) as i32;
            canvas.line(px, top, px, (margin + grid_h) as i32, "black", options.line_width);
        }
        for y in 0..=pattern.height() {
            let py = (margin + y * scale) as i32;
            canvas.line(left, py, (margin + grid_w) as i32, py, "black", options.line_width);
        }
    }

    if options.show_numbers {
        draw_cell_numbers(&mut canvas, pattern, options);
    }

    let outset = options.border_outset;
    canvas.rect(
        (margin - outset) as i32,
        (margin - outset) as i32,
        grid_w + 2 * outset,
        grid_h + 2 * outset,
        None,
        Some("black"),
        options.border_width,
    );

    draw_axis_labels(&mut canvas, pattern, options);

    canvas.into_svg()
}

/// Palette ids over the cells, each on a small white patch so the number
/// stays readable on dark colors.
fn draw_cell_numbers(canvas: &mut SvgCanvas, pattern: &Pattern, options: &ChartOptions) {
    let scale = options.scale;
    let margin = options.margin;
    let font = (scale as f32 * options.number_ratio) as u32;
    let pad = options.number_padding;

    for y in 0..pattern.height() {
        for x in 0..pattern.width() {
            let label = pattern.label_at(x, y);
            let id = pattern.palette()[label as usize].id.to_string();
            let cx = (x * scale + margin + scale / 2) as i32;
            let cy = (y * scale + margin + scale / 2) as i32;
            // Approximate digit advance as 3/5 of the font size.
            let patch_w = id.len() as u32 * font * 3 / 5 + 2 * pad;
            let patch_h = font + 2 * pad;
            canvas.rect(
                cx - (patch_w / 2) as i32,
                cy - (patch_h / 2) as i32,
                patch_w,
                patch_h,
                Some("white"),
                None,
                0,
            );
            canvas.text_centered(cx, cy, font, "black", &id);
        }
    }
}

/// Row numbers on the right edge and column numbers below the grid, both
/// counting up from the bottom-right corner.
fn draw_axis_labels(canvas: &mut SvgCanvas, pattern: &Pattern, options: &ChartOptions) {
    let scale = options.scale;
    let margin = options.margin;
    let right_edge = (pattern.width() * scale + margin) as i32;
    let bottom_edge = (pattern.height() * scale + margin) as i32;

    for y in 0..pattern.height() {
        let row_number = (pattern.height() - y).to_string();
        let cy = (y * scale + margin + scale / 2) as i32;
        if options.row_ticks {
            canvas.line(right_edge, cy, right_edge + TICK_LEN, cy, "black", 1);
        }
        canvas.text_left(
            right_edge + options.label_gap_x as i32,
            cy,
            options.label_font,
            "black",
            &row_number,
        );
    }

    for x in 0..pattern.width() {
        let col_number = (pattern.width() - x).to_string();
        let cx = (x * scale + margin + scale / 2) as i32;
        canvas.line(cx, bottom_edge, cx, bottom_edge + TICK_LEN, "black", options.line_width);
        canvas.text_centered(
            cx,
            bottom_edge + (options.label_gap_y + options.label_font / 2) as i32,
            options.label_font,
            "black",
            &col_number,
        );
    }
}
