pub mod events;
pub mod pages;

#[cfg(test)]
pub mod test_support;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use eventide_core::EventError;

/// Standard API error body, mirroring the underlying failure's message.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Maps `EventError` to an HTTP response at the handler boundary.
///
/// Not-found -> 404, malformed id / validation -> 400, everything else
/// (store unreachable, serialization) -> 500.
pub struct AppError(EventError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            EventError::NotFound(_) => StatusCode::NOT_FOUND,
            EventError::InvalidId(_) | EventError::Validation(_) => StatusCode::BAD_REQUEST,
            EventError::Database(_) | EventError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorResponse {
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        Self(err)
    }
}
