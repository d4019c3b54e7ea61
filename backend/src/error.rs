//! Error handling for the Agri Advisory Platform
//!
//! Only validation and configuration problems ever reach a client as an
//! error; generative-model and text-parsing failures are absorbed upstream
//! and converted into degraded-but-valid success responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Required external credential absent at startup
    #[error("Missing {0}")]
    Configuration(String),

    /// Required request fields missing
    #[error("{0}")]
    Validation(String),

    /// Required inference feature missing
    #[error("{0}")]
    Input(String),

    /// Classifier or label-encoder artifact missing or corrupt.
    /// Fatal at startup; the inference server refuses to come up.
    #[error("Model artifact error: {0}")]
    ModelArtifact(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Flat error body used by all endpoints
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Configuration(key) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Missing {}", key))
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ModelArtifact(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Model artifact error: {}", msg),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response =
            AppError::Validation("Missing required fields".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_configuration_maps_to_500() {
        let response =
            AppError::Configuration("GOOGLE_GENAI_API_KEY".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_configuration_message_names_credential() {
        let err = AppError::Configuration("GOOGLE_GENAI_API_KEY".to_string());
        assert_eq!(err.to_string(), "Missing GOOGLE_GENAI_API_KEY");
    }
}
