use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Uniform error raised by the repository and route layer.
///
/// Every "not found" / "invalid parameter" condition carries the same
/// shape: an HTTP status code, its status text and a human-readable
/// message. The route layer returns it to clients verbatim.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{status_code} {status_text}: {message}")]
pub struct HttpError {
    pub status_code: u16,
    pub status_text: String,
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<sqlx::Error> for HttpError {
    fn from(e: sqlx::Error) -> Self {
        error!(error = %e, "database error");
        Self::internal(e.to_string())
    }
}

impl From<anyhow::Error> for HttpError {
    fn from(e: anyhow::Error) -> Self {
        error!(error = %e, "internal error");
        Self::internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_404_and_status_text() {
        let err = HttpError::not_found("User 42 not found");
        assert_eq!(err.status_code, 404);
        assert_eq!(err.status_text, "Not Found");
        assert_eq!(err.message, "User 42 not found");
    }

    #[test]
    fn bad_request_and_internal_status_lines() {
        assert_eq!(HttpError::bad_request("x").status_code, 400);
        assert_eq!(HttpError::bad_request("x").status_text, "Bad Request");
        assert_eq!(HttpError::internal("x").status_code, 500);
        assert_eq!(HttpError::internal("x").status_text, "Internal Server Error");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let err = HttpError::not_found("Invalid query parameters");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["statusText"], "Not Found");
        assert_eq!(json["message"], "Invalid query parameters");
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = HttpError::not_found("missing");
        assert_eq!(err.to_string(), "404 Not Found: missing");
    }
}
