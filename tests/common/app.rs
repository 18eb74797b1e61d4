//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use stitchgrid::assets::AssetLoader;
use stitchgrid::models::AppConfig;
use stitchgrid::server::{build_router, create_app_state};
use stitchgrid::services::{OutputStore, PatternService};

/// Multipart boundary used by all test requests
const BOUNDARY: &str = "stitchgrid-test-boundary";

/// One part of a multipart form body
pub struct MultipartField<'a> {
    name: &'a str,
    filename: Option<&'a str>,
    data: Vec<u8>,
}

impl<'a> MultipartField<'a> {
    /// A plain text form value
    pub fn text(name: &'a str, value: &str) -> Self {
        Self {
            name,
            filename: None,
            data: value.as_bytes().to_vec(),
        }
    }

    /// A file upload part
    pub fn file(name: &'a str, filename: &'a str, data: Vec<u8>) -> Self {
        Self {
            name,
            filename: Some(filename),
            data,
        }
    }
}

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub patterns: Arc<PatternService>,
    pub outputs: Arc<OutputStore>,
    // Keeps the temporary output directory alive for the app's lifetime
    _output_dir: TempDir,
}

impl TestApp {
    /// Create a new test application writing artifacts into a temp directory
    pub fn new() -> Self {
        let output_dir = TempDir::new().expect("Failed to create temp output dir");

        // Create asset loader with embedded assets only (no external paths)
        let asset_loader = Arc::new(AssetLoader::new(None, None));

        let config = AppConfig {
            output_dir: output_dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        // Create application state using shared server module
        let state = create_app_state(asset_loader, config).expect("Failed to create app state");

        // Keep references for test assertions
        let patterns = state.patterns.clone();
        let outputs = state.outputs.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self {
            router,
            patterns,
            outputs,
            _output_dir: output_dir,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with an empty body
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request(Request::post(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a multipart form body
    pub async fn post_multipart(&self, path: &str, fields: &[MultipartField<'_>]) -> TestResponse {
        let mut body = Vec::new();
        for field in fields {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match field.filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        field.name, filename
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                        field.name
                    )
                    .as_bytes(),
                ),
            }
            body.extend_from_slice(&field.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        self.request(
            Request::post(path)
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Upload an image with explicit grid parameters
    pub async fn generate(
        &self,
        image: Vec<u8>,
        width: &str,
        height: &str,
        num_colors: &str,
    ) -> TestResponse {
        self.post_multipart(
            "/api/generate",
            &[
                MultipartField::file("image", "photo.png", image),
                MultipartField::text("width", width),
                MultipartField::text("height", height),
                MultipartField::text("num_colors", num_colors),
            ],
        )
        .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }

    /// Decode the body as a PNG and return (width, height)
    pub fn png_dimensions(&self) -> (u32, u32) {
        let img = image::load_from_memory(&self.body).expect("Failed to decode PNG body");
        (img.width(), img.height())
    }

    /// Decode the body as a PNG and return the pixel at (x, y)
    pub fn png_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let img = image::load_from_memory(&self.body)
            .expect("Failed to decode PNG body")
            .to_rgb8();
        img.get_pixel(x, y).0
    }
}
