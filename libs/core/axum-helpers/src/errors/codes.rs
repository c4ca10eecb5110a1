//! Type-safe error codes for API responses.
//!
//! Each code carries a client-facing identifier (`"NOT_ACCEPTABLE"`), an
//! integer for logs and dashboards (`1013`) and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotAcceptable;
//! assert_eq!(code.as_str(), "NOT_ACCEPTABLE");
//! assert_eq!(code.code(), 1013);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Requested resource was not found
    NotFound,

    /// HTTP method is not supported by the resource
    MethodNotAllowed,

    /// None of the representations the resource produces is acceptable
    NotAcceptable,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    // Serialization errors (5000s)
    /// XML serialization error
    XmlSerializationError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::NotAcceptable => "NOT_ACCEPTABLE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::XmlSerializationError => "XML_SERIALIZATION_ERROR",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1999: client and generic server errors
    /// - 5000-5999: serialization errors
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::MethodNotAllowed => 1012,
            Self::NotAcceptable => 1013,

            Self::XmlSerializationError => 5002,
        }
    }

    /// Default user-facing message. Handlers may override it.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::NotAcceptable => "No acceptable representation is available",
            Self::InternalError => "An internal server error occurred",
            Self::XmlSerializationError => "XML serialization error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
