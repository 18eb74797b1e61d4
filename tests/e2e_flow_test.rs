//! End-to-end flow tests covering complete user scenarios.

mod common;

use axum::http::StatusCode;
use common::{fixtures, fixtures::colors, TestApp};
use serde_json::json;

/// Find the id of the palette entry with the given color
fn id_of(palette: &serde_json::Value, rgb: [u8; 3]) -> u64 {
    palette
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["rgb"] == json!(rgb))
        .unwrap_or_else(|| panic!("No palette entry with color {rgb:?}"))["id"]
        .as_u64()
        .unwrap()
}

#[tokio::test]
async fn test_complete_pattern_flow() {
    let app = TestApp::new();

    // Step 1: Upload a photo and build the pattern
    let response = app
        .generate(
            fixtures::two_tone_png(8, 8, colors::RED, colors::BLUE),
            "4",
            "4",
            "2",
        )
        .await;
    common::assert_ok(&response);
    let body: serde_json::Value = response.json();
    let blue_id = id_of(&body["colors"], colors::BLUE);

    // Step 2: Repaint the blue yarn green
    let response = app
        .post_json(
            "/api/recolor",
            json!({ "old_color": [0, 0, 255], "new_color": [0, 255, 0] }),
        )
        .await;
    common::assert_ok(&response);
    let body: serde_json::Value = response.json();
    assert_eq!(body["changed"], json!(blue_id));

    // Step 3: Turn cell numbers off for a clean export
    let response = app
        .post_json("/api/numbers", json!({ "show_numbers": false }))
        .await;
    common::assert_ok(&response);

    // Step 4: Export all three artifacts
    let response = app.post_empty("/api/render/all").await;
    common::assert_ok(&response);

    let chart = app.get("/output/pattern.png").await;
    common::assert_png(&chart);
    assert_eq!(chart.png_dimensions(), (320, 270));
    // Left columns kept their color, right columns follow the recolor
    assert_eq!(chart.png_pixel(115, 115), colors::RED);
    assert_eq!(chart.png_pixel(205, 115), colors::GREEN);

    let legend = app.get("/output/color_list.png").await;
    common::assert_png(&legend);
    assert_eq!(legend.png_dimensions(), (400, 220));
    let swatches = [legend.png_pixel(45, 105), legend.png_pixel(45, 165)];
    assert!(swatches.contains(&colors::RED));
    assert!(swatches.contains(&colors::GREEN));

    let gauge = app.get("/output/gauge_calculation.png").await;
    common::assert_png(&gauge);
    assert_eq!(gauge.png_dimensions(), (400, 300));

    // Step 5: Clear and verify the session is gone
    let response = app.post_empty("/api/clear").await;
    common::assert_ok(&response);

    let response = app.post_empty("/api/render/all").await;
    common::assert_json_error(&response, StatusCode::NOT_FOUND, "No pattern loaded");

    let preview = app.get("/output/pattern.png").await;
    assert_eq!(preview.png_dimensions(), (100, 100));
}

#[tokio::test]
async fn test_generate_is_deterministic_across_instances() {
    let image = fixtures::gradient_png(32, 32);

    let first_app = TestApp::new();
    let first = first_app.generate(image.clone(), "8", "8", "4").await;
    common::assert_ok(&first);

    let second_app = TestApp::new();
    let second = second_app.generate(image, "8", "8", "4").await;
    common::assert_ok(&second);

    // Seeded clustering: identical input yields identical palettes
    let first_colors: serde_json::Value = first.json::<serde_json::Value>()["colors"].clone();
    let second_colors: serde_json::Value = second.json::<serde_json::Value>()["colors"].clone();
    assert_eq!(first_colors, second_colors);

    // And identical cell labels, not just palettes
    let first_pattern = first_app.patterns.snapshot().await.unwrap().pattern;
    let second_pattern = second_app.patterns.snapshot().await.unwrap().pattern;
    assert_eq!(first_pattern, second_pattern);
}
