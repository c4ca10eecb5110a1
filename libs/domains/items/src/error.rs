use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    /// Request body present but not parseable as an item
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Required query parameter absent
    #[error("Required request parameter '{0}' is not present")]
    MissingParameter(&'static str),

    /// Any other body rejection (missing content type, unreadable body)
    #[error(transparent)]
    Rejected(JsonRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<JsonRejection> for ItemError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                ItemError::InvalidInput(rejection.body_text())
            }
            other => ItemError::Rejected(other),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            ItemError::InvalidInput(_) => {
                tracing::info!("Rejected item body: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ItemError::MissingParameter(_) => {
                tracing::info!("Rejected item query: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ItemError::Rejected(rejection) => rejection.into_response(),
            ItemError::Internal(msg) => AppError::InternalServerError(msg).into_response(),
        }
    }
}
