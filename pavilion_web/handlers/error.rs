use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use pavilion_types::{EncoderError, ProfileError, StorageError};

/// API-boundary error. Collaborator failures keep their typed source and
/// are rendered as a JSON `{"error": ...}` body with the matching status
/// code only when the response is built.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Upstream(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Encoding(#[from] EncoderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            ApiError::Storage(err @ StorageError::AlreadyExists { .. }) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            ApiError::Storage(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Image upload failed: {err}"),
            ),
            ApiError::Profile(err @ ProfileError::AlreadyExists { .. }) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            ApiError::Profile(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to save player data: {err}"),
            ),
            ApiError::Encoding(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Image upload failed: {err}"),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
