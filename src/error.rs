use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::ServiceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No images uploaded.")]
    NoImages,

    #[error("No valid colors extracted from images.")]
    NoUsableInput,

    #[error("Too many files (max {max})")]
    TooManyFiles { max: usize },

    #[error("File {file_name} is too large (max {max} bytes)")]
    FileTooLarge { file_name: String, max: usize },

    #[error("Malformed multipart request: {0}")]
    Multipart(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NoImages => ApiError::NoImages,
            ServiceError::NoUsableInput { .. } => ApiError::NoUsableInput,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NoImages => StatusCode::BAD_REQUEST,
            ApiError::NoUsableInput => StatusCode::BAD_REQUEST,
            ApiError::TooManyFiles { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
