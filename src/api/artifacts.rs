use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::rendering::ChartOptions;
use crate::server::AppState;
use crate::services::{CHART_FILE, GAUGE_FILE, LEGEND_FILE};

/// Optional body for the render endpoints
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RenderRequest {
    /// Override the stored number display flag for this render only
    pub show_numbers: Option<bool>,
}

/// Response from the single-artifact render endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct RenderResponse {
    pub success: bool,
    pub message: String,
    /// Web path of the written artifact
    pub path: String,
}

/// Artifact paths written by /api/render/all
#[derive(Debug, Serialize, ToSchema)]
pub struct ArtifactPaths {
    pub pattern: String,
    pub color_list: String,
    pub gauge: String,
}

/// Response from the /api/render/all endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RenderAllResponse {
    pub success: bool,
    pub message: String,
    pub files: ArtifactPaths,
}

/// Export the printable chart
///
/// Renders the loaded pattern with the large-cell export layout and
/// replaces the chart artifact. An optional body can override the stored
/// number display flag without persisting it.
#[utoipa::path(
    post,
    path = "/api/render/chart",
    request_body = RenderRequest,
    responses(
        (status = 200, description = "Chart written", body = RenderResponse),
        (status = 404, description = "No pattern loaded"),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Artifacts"
)]
pub async fn handle_render_chart(
    State(state): State<AppState>,
    request: Option<Json<RenderRequest>>,
) -> Result<Json<RenderResponse>, ApiError> {
    let snapshot = state
        .patterns
        .snapshot()
        .await
        .ok_or(ApiError::NoPatternLoaded)?;
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let show_numbers = request.show_numbers.unwrap_or(snapshot.show_numbers);

    let png = state
        .renderer
        .render_chart(&snapshot.pattern, &ChartOptions::export(show_numbers))
        .await?;
    let path = state.outputs.write(CHART_FILE, &png)?;

    tracing::info!(path = %path, show_numbers = show_numbers, "Exported chart");

    Ok(Json(RenderResponse {
        success: true,
        message: "Pattern saved successfully".to_string(),
        path,
    }))
}

/// Export the color list
#[utoipa::path(
    post,
    path = "/api/render/legend",
    responses(
        (status = 200, description = "Color list written", body = RenderResponse),
        (status = 404, description = "No pattern loaded"),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Artifacts"
)]
pub async fn handle_render_legend(
    State(state): State<AppState>,
) -> Result<Json<RenderResponse>, ApiError> {
    let palette = state
        .patterns
        .palette()
        .await
        .ok_or(ApiError::NoPatternLoaded)?;

    let png = state.renderer.render_legend(&palette).await?;
    let path = state.outputs.write(LEGEND_FILE, &png)?;

    tracing::info!(path = %path, entries = palette.len(), "Exported color list");

    Ok(Json(RenderResponse {
        success: true,
        message: "Color list saved successfully".to_string(),
        path,
    }))
}

/// Export the gauge card
#[utoipa::path(
    post,
    path = "/api/render/gauge",
    responses(
        (status = 200, description = "Gauge card written", body = RenderResponse),
        (status = 404, description = "No pattern loaded"),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Artifacts"
)]
pub async fn handle_render_gauge(
    State(state): State<AppState>,
) -> Result<Json<RenderResponse>, ApiError> {
    let snapshot = state
        .patterns
        .snapshot()
        .await
        .ok_or(ApiError::NoPatternLoaded)?;

    let png = state
        .renderer
        .render_gauge(snapshot.pattern.width(), snapshot.pattern.height())
        .await?;
    let path = state.outputs.write(GAUGE_FILE, &png)?;

    tracing::info!(path = %path, "Exported gauge card");

    Ok(Json(RenderResponse {
        success: true,
        message: "Gauge calculation saved successfully".to_string(),
        path,
    }))
}

/// Export all three artifacts
///
/// Writes the chart, color list, and gauge card in one call. Nothing is
/// written unless all three renders succeed.
#[utoipa::path(
    post,
    path = "/api/render/all",
    request_body = RenderRequest,
    responses(
        (status = 200, description = "All artifacts written", body = RenderAllResponse),
        (status = 404, description = "No pattern loaded"),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Artifacts"
)]
pub async fn handle_render_all(
    State(state): State<AppState>,
    request: Option<Json<RenderRequest>>,
) -> Result<Json<RenderAllResponse>, ApiError> {
    let snapshot = state
        .patterns
        .snapshot()
        .await
        .ok_or(ApiError::NoPatternLoaded)?;
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let show_numbers = request.show_numbers.unwrap_or(snapshot.show_numbers);

    let chart = state
        .renderer
        .render_chart(&snapshot.pattern, &ChartOptions::export(show_numbers))
        .await?;
    let legend = state
        .renderer
        .render_legend(snapshot.pattern.palette())
        .await?;
    let gauge = state
        .renderer
        .render_gauge(snapshot.pattern.width(), snapshot.pattern.height())
        .await?;

    let files = ArtifactPaths {
        pattern: state.outputs.write(CHART_FILE, &chart)?,
        color_list: state.outputs.write(LEGEND_FILE, &legend)?,
        gauge: state.outputs.write(GAUGE_FILE, &gauge)?,
    };

    tracing::info!("Exported all artifacts");

    Ok(Json(RenderAllResponse {
        success: true,
        message: "All files saved successfully".to_string(),
        files,
    }))
}
