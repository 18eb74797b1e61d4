//! Minimal SVG document builder.
//!
//! Every artifact is composed from rects, lines, and text on a white
//! background. Text is positioned by its vertical center
//! (`dominant-baseline="central"`), so callers pass the midline rather
//! than a top edge.

use std::fmt::Write;

/// Accumulates SVG elements for a fixed-size document.
pub struct SvgCanvas {
    body: String,
}

impl SvgCanvas {
    /// Start a document of `width` x `height` pixels with a white background.
    pub fn new(width: u32, height: u32) -> Self {
        let mut body = String::new();
        let _ = write!(
            body,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#,
        );
        let _ = write!(
            body,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="white"/>"#,
        );
        Self { body }
    }

    /// A rectangle. `fill` of `None` emits `fill="none"`; `stroke_width` is
    /// only emitted together with a stroke color.
    pub fn rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fill: Option<&str>,
        stroke: Option<&str>,
        stroke_width: u32,
    ) {
        let fill = fill.unwrap_or("none");
        let _ = write!(
            self.body,
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}""#,
        );
        if let Some(stroke) = stroke {
            let _ = write!(self.body, r#" stroke="{stroke}" stroke-width="{stroke_width}""#);
        }
        self.body.push_str("/>");
    }

    /// A straight stroked line.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, stroke: &str, stroke_width: u32) {
        let _ = write!(
            self.body,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
        );
    }

    /// Text centered horizontally on `cx` and vertically on `cy`.
    pub fn text_centered(&mut self, cx: i32, cy: i32, font_size: u32, fill: &str, content: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{cx}" y="{cy}" font-size="{font_size}" fill="{fill}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            escape_text(content),
        );
    }

    /// Text starting at `x`, vertically centered on `cy`.
    pub fn text_left(&mut self, x: i32, cy: i32, font_size: u32, fill: &str, content: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{x}" y="{cy}" font-size="{font_size}" fill="{fill}" dominant-baseline="central">{}</text>"#,
            escape_text(content),
        );
    }

    /// Close the document and return the SVG source.
    pub fn into_svg(mut self) -> String {
        self.body.push_str("</svg>");
        self.body
    }
}

fn escape_text(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
