use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image uploaded")]
    MissingImage,

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("{0}")]
    Pattern(#[from] stitch_quant::PatternError),

    #[error("No pattern loaded")]
    NoPatternLoaded,

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to write output file: {0}")]
    ArtifactWrite(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingImage => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidParams(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Pattern(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::NoPatternLoaded => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::ArtifactWrite(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
