use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::generate::ColorEntry;
use crate::error::ApiError;
use crate::rendering::ChartOptions;
use crate::server::AppState;
use crate::services::CHART_FILE;
use stitch_quant::Rgb;

/// Request body for /api/recolor
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecolorRequest {
    /// Exact current color to replace, as [r, g, b]
    pub old_color: [u8; 3],
    /// Replacement color, as [r, g, b]
    pub new_color: [u8; 3],
}

/// Response from the /api/recolor endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RecolorResponse {
    /// Updated palette, ascending by id
    pub colors: Vec<ColorEntry>,
    /// Id of the repainted entry; null when no entry matched
    pub changed: Option<u32>,
}

/// Request body for /api/numbers
#[derive(Debug, Deserialize, ToSchema)]
pub struct NumbersRequest {
    /// Whether charts should draw cell numbers
    #[serde(default = "default_show_numbers")]
    pub show_numbers: bool,
}

fn default_show_numbers() -> bool {
    true
}

/// Generic success acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Repaint one palette entry
///
/// Replaces the first palette entry whose color exactly matches
/// `old_color` and refreshes the preview chart. A miss is not an error:
/// the response reports `changed: null` and the pattern stays as it was.
#[utoipa::path(
    post,
    path = "/api/recolor",
    request_body = RecolorRequest,
    responses(
        (status = 200, description = "Palette updated", body = RecolorResponse),
        (status = 404, description = "No pattern loaded"),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Pattern"
)]
pub async fn handle_recolor(
    State(state): State<AppState>,
    Json(request): Json<RecolorRequest>,
) -> Result<Json<RecolorResponse>, ApiError> {
    let old = Rgb::from(request.old_color);
    let new = Rgb::from(request.new_color);

    let (pattern, changed) = state
        .patterns
        .recolor(old, new)
        .await
        .ok_or(ApiError::NoPatternLoaded)?;

    tracing::info!(old = %old, new = %new, changed = ?changed, "Recolor request");

    let show_numbers = state.patterns.show_numbers().await;
    let png = state
        .renderer
        .render_chart(&pattern, &ChartOptions::preview(show_numbers))
        .await?;
    state.outputs.write(CHART_FILE, &png)?;

    Ok(Json(RecolorResponse {
        colors: pattern.palette().iter().map(ColorEntry::from).collect(),
        changed,
    }))
}

/// Clear the loaded pattern
///
/// Drops the pattern and overwrites the preview chart with a blank white
/// placeholder. Clearing an already-empty store succeeds.
#[utoipa::path(
    post,
    path = "/api/clear",
    responses(
        (status = 200, description = "Pattern cleared", body = SuccessResponse),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Pattern"
)]
pub async fn handle_clear(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.patterns.clear().await;

    let png = state.renderer.render_placeholder().await?;
    state.outputs.write(CHART_FILE, &png)?;

    tracing::info!("Cleared pattern");

    Ok(Json(SuccessResponse {
        success: true,
        message: None,
    }))
}

/// Toggle cell numbers
///
/// Persists the flag for future renders. When a pattern is loaded, the
/// preview chart is re-rendered immediately so the change is visible.
#[utoipa::path(
    post,
    path = "/api/numbers",
    request_body = NumbersRequest,
    responses(
        (status = 200, description = "Flag updated", body = SuccessResponse),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Pattern"
)]
pub async fn handle_numbers(
    State(state): State<AppState>,
    Json(request): Json<NumbersRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.patterns.set_show_numbers(request.show_numbers).await;

    if let Some(snapshot) = state.patterns.snapshot().await {
        let png = state
            .renderer
            .render_chart(
                &snapshot.pattern,
                &ChartOptions::preview(request.show_numbers),
            )
            .await?;
        state.outputs.write(CHART_FILE, &png)?;
    }

    tracing::info!(show_numbers = request.show_numbers, "Updated number display");

    Ok(Json(SuccessResponse {
        success: true,
        message: None,
    }))
}
