//! Error types for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mock_api::ApiError;
use skillsync_core::Lookup;
use thiserror::Error;

/// Errors a route can return.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Facade call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Requested record does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Api(ApiError::NotAuthenticated) => StatusCode::UNAUTHORIZED,
            GatewayError::Api(ApiError::Mentor(err)) => {
                tracing::error!("Mentor error: {}", err);
                StatusCode::SERVICE_UNAVAILABLE
            }
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for route handlers.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Unwrap a lookup, turning a miss into a 404.
pub fn found<T>(lookup: Lookup<T>) -> Result<T> {
    match lookup {
        Lookup::Found(value) => Ok(value),
        missing => Err(GatewayError::NotFound(missing.to_string())),
    }
}
