use crate::error::RenderError;

use resvg::usvg::{self, Transform};
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Rasterizes SVG documents to RGB PNGs.
///
/// Documents are rendered at their intrinsic size onto a white background,
/// so output dimensions always match the SVG `width`/`height` attributes.
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a new renderer with fonts loaded from the provided data
    pub fn with_fonts(fonts: Vec<(String, Vec<u8>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data);
            tracing::debug!(font = %name, "Loaded font");
        }

        // Load system fonts as fallback
        fontdb.load_system_fonts();

        tracing::info!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a new renderer with no custom fonts (system fonts only)
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Render an SVG document to a PNG.
    pub fn render_png(&self, svg_data: &[u8]) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data)?;
        let rgb = rgba_to_rgb(pixmap.data());
        encode_png(pixmap.width(), pixmap.height(), &rgb)
    }

    /// Parse and rasterize SVG to an RGBA pixmap at its intrinsic size
    fn rasterize_svg(&self, svg_data: &[u8]) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let size = tree.size().to_int_size();
        let mut pixmap =
            Pixmap::new(size.width(), size.height()).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert RGBA pixel data to RGB, alpha-compositing against white.
fn rgba_to_rgb(rgba_data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba_data.len() / 4 * 3);
    for pixel in rgba_data.chunks_exact(4) {
        let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
        if a == 255 {
            rgb.extend_from_slice(&[r, g, b]);
        } else if a == 0 {
            rgb.extend_from_slice(&[255, 255, 255]);
        } else {
            // Alpha composite against white
            let af = a as u16;
            rgb.push(((r as u16 * af + 255 * (255 - af)) / 255) as u8);
            rgb.push(((g as u16 * af + 255 * (255 - af)) / 255) as u8);
            rgb.push(((b as u16 * af + 255 * (255 - af)) / 255) as u8);
        }
    }
    rgb
}

/// Encode 8-bit RGB rows as a PNG.
fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
