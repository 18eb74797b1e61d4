//! Gauge card: translates grid dimensions into finished physical size.

use crate::rendering::canvas::SvgCanvas;

/// Stitches per 10 cm at standard tension.
pub const STITCH_GAUGE: f64 = 17.0;
/// Rows per 10 cm at standard tension.
pub const ROW_GAUGE: f64 = 22.0;

/// Estimated finished size in centimeters for a `width` x `height` grid.
pub fn physical_size(width: u32, height: u32) -> (f64, f64) {
    (
        f64::from(width) / STITCH_GAUGE * 10.0,
        f64::from(height) / ROW_GAUGE * 10.0,
    )
}

/// Render the gauge card SVG document for a grid of the given dimensions.
pub fn gauge_svg(width: u32, height: u32) -> String {
    let (physical_w, physical_h) = physical_size(width, height);
    let mut canvas = SvgCanvas::new(400, 300);

    canvas.text_left(20, 32, 24, "black", "Gauge Calculation");
    canvas.text_left(20, 88, 16, "black", "Standard Gauge: 17 \u{d7} 22");
    canvas.text_left(
        20,
        128,
        16,
        "black",
        &format!("Pattern Size: {width} \u{d7} {height} stitches"),
    );
    canvas.text_left(
        20,
        168,
        16,
        "black",
        &format!("Estimated Size: {physical_w:.1} \u{d7} {physical_h:.1} cm"),
    );

    canvas.into_svg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_size() {
        let (w, h) = physical_size(110, 110);
        assert!((w - 64.7059).abs() < 0.001);
        assert!((h - 50.0).abs() < 0.001);

        let (w, h) = physical_size(17, 22);
        assert!((w - 10.0).abs() < 1e-9);
        assert!((h - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_gauge_card_lines() {
        let svg = gauge_svg(110, 110);
        assert!(svg.contains(r#"width="400" height="300""#));
        assert!(svg.contains(
            r#"<text x="20" y="32" font-size="24" fill="black" dominant-baseline="central">Gauge Calculation</text>"#
        ));
        assert!(svg.contains("Standard Gauge: 17 \u{d7} 22"));
        assert!(svg.contains("Pattern Size: 110 \u{d7} 110 stitches"));
        assert!(svg.contains("Estimated Size: 64.7 \u{d7} 50.0 cm"));
    }

    #[test]
    fn test_size_rounding_to_one_decimal() {
        // 33 / 17 * 10 = 19.411...; 45 / 22 * 10 = 20.454...
        let svg = gauge_svg(33, 45);
        assert!(svg.contains("Estimated Size: 19.4 \u{d7} 20.5 cm"));
    }
}
