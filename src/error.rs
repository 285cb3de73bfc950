use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::maze::MazeError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Every rejected move collapses into a single client error so callers only
/// ever see `bad move` or `bad room`.
#[derive(Debug)]
pub enum ApiError {
    /// Unrecognized direction, or a direction not open from this room
    BadMove,
    /// Room path segment is not an integer
    InvalidRoom(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadMove => (StatusCode::BAD_REQUEST, "bad move"),
            ApiError::InvalidRoom(raw) => {
                tracing::debug!("Rejected room identifier: '{}'", raw);
                (StatusCode::BAD_REQUEST, "bad room")
            }
        };

        let body = Json(ErrorResponse {
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<MazeError> for ApiError {
    fn from(err: MazeError) -> Self {
        match err {
            MazeError::InvalidRoom(raw) => ApiError::InvalidRoom(raw),
            MazeError::UnknownDirection(_)
            | MazeError::BlockedExit { .. }
            | MazeError::OutOfBounds { .. } => ApiError::BadMove,
        }
    }
}
