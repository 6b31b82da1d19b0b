use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roofquote_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error that renders as `{"error": "..."}` with a fitting status.
///
/// Repository errors pick their status through
/// [`repository_error_to_status_code`]; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::error!(status = %status_code, error = %self.0, "Request failed");

        error_response(status_code, self.0.to_string())
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// JSON error body with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": message.into() })),
    )
        .into_response()
}

/// Turns a rejected JSON body into a 400, whatever axum's own status was.
pub fn bad_request(rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    tracing::warn!(message = %message, "Rejected malformed request body");
    error_response(StatusCode::BAD_REQUEST, message)
}

/// Turns an unparsable query string into a 400 with a JSON body.
pub fn bad_query(rejection: QueryRejection) -> Response {
    let message = rejection.body_text();
    tracing::warn!(message = %message, "Rejected malformed query string");
    error_response(StatusCode::BAD_REQUEST, message)
}
