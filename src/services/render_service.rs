use crate::assets::AssetLoader;
use crate::error::RenderError;
use crate::rendering::{chart_svg, gauge_svg, legend_svg, ChartOptions, SvgCanvas, SvgRenderer};
use std::sync::Arc;
use stitch_quant::{PaletteEntry, Pattern};

/// Side length of the blank placeholder written after a clear.
const PLACEHOLDER_SIZE: u32 = 100;

/// Renders pattern artifacts to PNG bytes.
///
/// SVG composition is cheap; the rasterization is not, so every render
/// runs inside `spawn_blocking` to keep the async runtime free.
pub struct RenderService {
    svg_renderer: Arc<SvgRenderer>,
}

impl RenderService {
    pub fn new(assets: &AssetLoader) -> Self {
        Self {
            svg_renderer: Arc::new(SvgRenderer::with_fonts(assets.get_fonts())),
        }
    }

    /// Render the stitch chart.
    pub async fn render_chart(
        &self,
        pattern: &Pattern,
        options: &ChartOptions,
    ) -> Result<Vec<u8>, RenderError> {
        self.render_in_blocking_context(chart_svg(pattern, options))
            .await
    }

    /// Render the color list.
    pub async fn render_legend(&self, palette: &[PaletteEntry]) -> Result<Vec<u8>, RenderError> {
        self.render_in_blocking_context(legend_svg(palette)).await
    }

    /// Render the gauge card for a grid of the given dimensions.
    pub async fn render_gauge(&self, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        self.render_in_blocking_context(gauge_svg(width, height))
            .await
    }

    /// Render the blank white placeholder shown after a clear.
    pub async fn render_placeholder(&self) -> Result<Vec<u8>, RenderError> {
        let svg = SvgCanvas::new(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE).into_svg();
        self.render_in_blocking_context(svg).await
    }

    /// Execute CPU-intensive rendering in a blocking context
    async fn render_in_blocking_context(&self, svg: String) -> Result<Vec<u8>, RenderError> {
        let renderer = self.svg_renderer.clone();

        tokio::task::spawn_blocking(move || renderer.render_png(svg.as_bytes()))
            .await
            .map_err(|e| RenderError::SvgParse(format!("Render task failed: {e}")))?
    }
}
