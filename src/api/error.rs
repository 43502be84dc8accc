use crate::utils::error::StudentError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Error returned from request handlers.
///
/// Anything that reaches the HTTP boundary is a failure of this service
/// itself (college lookups never get here), so it maps to a 500.
#[derive(Debug)]
pub struct ApiError(pub StudentError);

impl From<StudentError> for ApiError {
    fn from(err: StudentError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed ({}): {}", self.0.category(), self.0);

        let body = serde_json::json!({
            "error": {
                "category": self.0.category(),
                "message": self.0.to_string(),
            }
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
