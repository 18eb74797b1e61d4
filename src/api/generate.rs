use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::rendering::ChartOptions;
use crate::server::AppState;
use crate::services::CHART_FILE;
use stitch_quant::PaletteEntry;

/// Maximum accepted multipart upload size
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

// Maximum allowed grid dimensions
const MAX_GRID: u32 = 400;

/// One palette entry in API responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorEntry {
    /// Stable palette id, starting at 1
    pub id: u32,
    /// Current color as [r, g, b]
    pub rgb: [u8; 3],
}

impl From<&PaletteEntry> for ColorEntry {
    fn from(entry: &PaletteEntry) -> Self {
        Self {
            id: entry.id,
            rgb: entry.rgb.as_array(),
        }
    }
}

/// Response from the /api/generate endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    /// Generated palette, ascending by id
    pub colors: Vec<ColorEntry>,
    /// Web path of the preview chart
    pub pattern_path: String,
}

/// Generate a pattern from an uploaded photo
///
/// Accepts a multipart form with the source image and optional grid
/// parameters. Form values arrive as strings; numeric fields also accept
/// float spellings like "110.0" and are truncated to integers. The
/// previous pattern is only replaced once the new one is fully built.
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body(
        content = Vec<u8>,
        content_type = "multipart/form-data",
        description = "Fields: image (required file), width, height, num_colors"
    ),
    responses(
        (status = 200, description = "Pattern generated", body = GenerateResponse),
        (status = 400, description = "Missing image or invalid parameters"),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Pattern"
)]
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GenerateResponse>, ApiError> {
    let mut image_bytes: Option<Bytes> = None;
    let mut width = state.config.default_width;
    let mut height = state.config.default_height;
    let mut num_colors = state.config.default_colors;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidParams(e.to_string()))?
    {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("image") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidParams(e.to_string()))?;
                // An empty file input still submits a zero-byte part
                if !data.is_empty() {
                    image_bytes = Some(data);
                }
            }
            Some("width") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::InvalidParams(e.to_string()))?;
                width = parse_dimension(&text, "width")?;
            }
            Some("height") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::InvalidParams(e.to_string()))?;
                height = parse_dimension(&text, "height")?;
            }
            Some("num_colors") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::InvalidParams(e.to_string()))?;
                num_colors = parse_color_count(&text)?;
            }
            _ => {}
        }
    }

    let image_bytes = image_bytes.ok_or(ApiError::MissingImage)?;

    if width > MAX_GRID || height > MAX_GRID {
        return Err(ApiError::InvalidParams(format!(
            "Grid dimensions are limited to {MAX_GRID} cells per side"
        )));
    }

    tracing::info!(
        bytes = image_bytes.len(),
        width = width,
        height = height,
        num_colors = num_colors,
        "Generate request received"
    );

    let pattern = tokio::task::spawn_blocking(move || {
        stitch_quant::generate(&image_bytes, width, height, num_colors)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Quantize task failed: {e}")))??;

    // Render and write the preview before swapping the stored pattern, so
    // a failure here leaves the previous pattern intact.
    let show_numbers = state.patterns.show_numbers().await;
    let png = state
        .renderer
        .render_chart(&pattern, &ChartOptions::preview(show_numbers))
        .await?;
    let pattern_path = state.outputs.write(CHART_FILE, &png)?;

    let colors: Vec<ColorEntry> = pattern.palette().iter().map(ColorEntry::from).collect();
    state.patterns.install(pattern).await;

    tracing::info!(colors = colors.len(), "Pattern generated");

    Ok(Json(GenerateResponse {
        colors,
        pattern_path,
    }))
}

/// Parse a grid dimension the way HTML forms deliver it: as a decimal
/// string, possibly with a fractional part, truncated toward zero.
fn parse_dimension(raw: &str, name: &str) -> Result<u32, ApiError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ApiError::InvalidParams(format!("{name} must be a number")))?
        as i64;
    u32::try_from(value)
        .map_err(|_| ApiError::InvalidParams(format!("{name} must be a positive number")))
}

fn parse_color_count(raw: &str) -> Result<usize, ApiError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ApiError::InvalidParams("num_colors must be a number".to_string()))?
        as i64;
    usize::try_from(value)
        .map_err(|_| ApiError::InvalidParams("num_colors must be a positive number".to_string()))
}
