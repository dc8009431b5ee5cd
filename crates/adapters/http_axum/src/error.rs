//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use flowboard_domain::error::FlowboardError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Pick the status code and client-facing message for an error.
pub(crate) fn status_and_message(err: &FlowboardError) -> (StatusCode, String) {
    match err {
        FlowboardError::Trigger(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        FlowboardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        FlowboardError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`FlowboardError`] to a JSON response with appropriate status code.
pub struct ApiError(FlowboardError);

impl From<FlowboardError> for ApiError {
    fn from(err: FlowboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
