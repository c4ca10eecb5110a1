pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard JSON error body.
///
/// ```json
/// {
///   "code": 1013,
///   "error": "NOT_ACCEPTABLE",
///   "message": "Acceptable representations: application/json"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<serde_json::Value>,
}

/// Application error type rendered as an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("XML serialization error: {0}")]
    XmlSerialization(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Not Acceptable: {0}")]
    NotAcceptable(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::XmlSerialization(e) => {
                tracing::error!(
                    error_code = ErrorCode::XmlSerializationError.code(),
                    "XML serialization error: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::XmlSerializationError.default_message().to_string(),
                    ErrorCode::XmlSerializationError,
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, ErrorCode::NotFound)
            }
            AppError::NotAcceptable(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotAcceptable.code(),
                    "Not acceptable: {}",
                    msg
                );
                (StatusCode::NOT_ACCEPTABLE, msg, ErrorCode::NotAcceptable)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg,
                    ErrorCode::InternalError,
                )
            }
        };

        error_response(status, message, code)
    }
}

/// Builds a JSON [`ErrorResponse`] with the given status.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "No such item".to_string(),
///     ErrorCode::NotFound,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn error_body(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_acceptable_renders_406() {
        let response = AppError::NotAcceptable("text/plain".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);

        let body = error_body(response).await;
        assert_eq!(body.code, 1013);
        assert_eq!(body.error, "NOT_ACCEPTABLE");
        assert_eq!(body.message, "text/plain");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_xml_failure_hides_internal_message() {
        let response =
            AppError::XmlSerialization("unsupported type".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = error_body(response).await;
        assert_eq!(body.error, "XML_SERIALIZATION_ERROR");
        assert_eq!(body.message, "XML serialization error");
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("missing item".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_body(response).await.message, "missing item");
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let body = ErrorResponse {
            code: 1004,
            error: "NOT_FOUND".to_string(),
            message: "gone".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }
}
