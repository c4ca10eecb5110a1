//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Acceptable - no producible representation matches the Accept header",
    content_type = "application/json",
    example = json!({
        "code": 1013,
        "error": "NOT_ACCEPTABLE",
        "message": "Acceptable representations: application/json, application/xml"
    })
)]
pub struct NotAcceptableResponse(pub ErrorResponse);

