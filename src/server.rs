//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, State},
    response::Html,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{OutputStore, PatternService, RenderService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub assets: Arc<AssetLoader>,
    pub patterns: Arc<PatternService>,
    pub renderer: Arc<RenderService>,
    pub outputs: Arc<OutputStore>,
}

/// Create application state from an asset loader and resolved config.
///
/// Opens the output directory and sweeps artifacts left over from a
/// previous run. Tests pass a config pointing the output directory
/// somewhere disposable.
pub fn create_app_state(
    asset_loader: Arc<AssetLoader>,
    config: AppConfig,
) -> anyhow::Result<AppState> {
    let outputs = Arc::new(OutputStore::new(&config.output_dir)?);
    outputs.cleanup();

    let renderer = Arc::new(RenderService::new(&asset_loader));
    let patterns = Arc::new(PatternService::new());

    Ok(AppState {
        config: Arc::new(config),
        assets: asset_loader,
        patterns,
        renderer,
        outputs,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let output_dir = state.outputs.dir().to_path_buf();

    Router::new()
        // Browser UI
        .route("/", get(handle_index))
        // Pattern lifecycle
        .route("/api/generate", post(api::handle_generate))
        .route("/api/recolor", post(api::handle_recolor))
        .route("/api/clear", post(api::handle_clear))
        .route("/api/numbers", post(api::handle_numbers))
        // Artifact exports
        .route("/api/render/chart", post(api::handle_render_chart))
        .route("/api/render/legend", post(api::handle_render_legend))
        .route("/api/render/gauge", post(api::handle_render_gauge))
        .route("/api/render/all", post(api::handle_render_all))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Rendered artifacts
        .nest_service("/output", ServeDir::new(output_dir))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(api::MAX_UPLOAD_BYTES))
}

async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state
        .assets
        .index_html()
        .map(Html)
        .ok_or_else(|| ApiError::Internal("Embedded UI not available".to_string()))
}
