//! Tests for the artifact export endpoints under /api/render.

mod common;

use axum::http::StatusCode;
use common::{fixtures, fixtures::colors, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_render_endpoints_404_without_pattern() {
    let app = TestApp::new();

    for path in [
        "/api/render/chart",
        "/api/render/legend",
        "/api/render/gauge",
        "/api/render/all",
    ] {
        let response = app.post_empty(path).await;
        common::assert_json_error(&response, StatusCode::NOT_FOUND, "No pattern loaded");
    }
}

#[tokio::test]
async fn test_render_chart_writes_export_png() {
    let app = TestApp::new();

    let response = app
        .generate(fixtures::solid_png(4, 4, colors::RED), "2", "2", "1")
        .await;
    common::assert_ok(&response);

    let response = app.post_empty("/api/render/chart").await;
    common::assert_ok(&response);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], "Pattern saved successfully");
    assert_eq!(body["path"], "/output/pattern.png");

    // Export geometry is larger than the preview written by generate
    let chart = app.get("/output/pattern.png").await;
    common::assert_png(&chart);
    assert_eq!(chart.png_dimensions(), (260, 210));
}

#[tokio::test]
async fn test_render_chart_numbers_override_is_oneshot() {
    let app = TestApp::new();

    let response = app
        .generate(fixtures::solid_png(4, 4, colors::RED), "2", "2", "1")
        .await;
    common::assert_ok(&response);

    // Override the stored flag for this export only
    let response = app
        .post_json("/api/render/chart", json!({ "show_numbers": false }))
        .await;
    common::assert_ok(&response);

    // First export cell spans 100..130, its center is clear of any patch
    let chart = app.get("/output/pattern.png").await;
    assert_eq!(chart.png_pixel(115, 115), colors::RED);

    // The stored flag is untouched, so a plain export draws numbers again
    assert!(app.patterns.show_numbers().await);
    let response = app.post_empty("/api/render/chart").await;
    common::assert_ok(&response);

    let chart = app.get("/output/pattern.png").await;
    assert_ne!(chart.png_pixel(115, 115), colors::RED);
}

#[tokio::test]
async fn test_render_legend_lists_palette() {
    let app = TestApp::new();

    let response = app
        .generate(
            fixtures::two_tone_png(8, 8, colors::RED, colors::BLUE),
            "4",
            "4",
            "2",
        )
        .await;
    common::assert_ok(&response);

    let response = app.post_empty("/api/render/legend").await;
    common::assert_ok(&response);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Color list saved successfully");
    assert_eq!(body["path"], "/output/color_list.png");

    // Header plus one 60px row per palette entry
    let legend = app.get("/output/color_list.png").await;
    common::assert_png(&legend);
    assert_eq!(legend.png_dimensions(), (400, 220));

    // Swatches carry the palette colors (order follows ids)
    let first = legend.png_pixel(45, 105);
    let second = legend.png_pixel(45, 165);
    assert!(first == colors::RED || first == colors::BLUE);
    assert!(second == colors::RED || second == colors::BLUE);
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_render_gauge_card() {
    let app = TestApp::new();

    let response = app
        .generate(fixtures::solid_png(4, 4, colors::RED), "2", "2", "1")
        .await;
    common::assert_ok(&response);

    let response = app.post_empty("/api/render/gauge").await;
    common::assert_ok(&response);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Gauge calculation saved successfully");
    assert_eq!(body["path"], "/output/gauge_calculation.png");

    let gauge = app.get("/output/gauge_calculation.png").await;
    common::assert_png(&gauge);
    assert_eq!(gauge.png_dimensions(), (400, 300));
}

#[tokio::test]
async fn test_render_all_writes_three_files() {
    let app = TestApp::new();

    let response = app
        .generate(fixtures::solid_png(4, 4, colors::RED), "2", "2", "1")
        .await;
    common::assert_ok(&response);

    let response = app.post_empty("/api/render/all").await;
    common::assert_ok(&response);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], "All files saved successfully");
    assert_eq!(body["files"]["pattern"], "/output/pattern.png");
    assert_eq!(body["files"]["color_list"], "/output/color_list.png");
    assert_eq!(body["files"]["gauge"], "/output/gauge_calculation.png");

    let chart = app.get("/output/pattern.png").await;
    common::assert_png(&chart);
    assert_eq!(chart.png_dimensions(), (260, 210));

    let legend = app.get("/output/color_list.png").await;
    common::assert_png(&legend);
    assert_eq!(legend.png_dimensions(), (400, 160));

    let gauge = app.get("/output/gauge_calculation.png").await;
    common::assert_png(&gauge);
    assert_eq!(gauge.png_dimensions(), (400, 300));
}

#[tokio::test]
async fn test_render_after_clear_404() {
    let app = TestApp::new();

    let response = app
        .generate(fixtures::solid_png(4, 4, colors::RED), "2", "2", "1")
        .await;
    common::assert_ok(&response);

    let response = app.post_empty("/api/clear").await;
    common::assert_ok(&response);

    let response = app.post_empty("/api/render/all").await;
    common::assert_json_error(&response, StatusCode::NOT_FOUND, "No pattern loaded");
}
