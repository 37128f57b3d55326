use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::short_link::errors::ShortLinkError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShortLinkError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShortLinkError::InvalidEncoding => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "short_link.invalid_encoding",
            ),
            ShortLinkError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "short_link.not_found")
            }
            ShortLinkError::InvalidBaseUrl => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "short_link.invalid_base_url",
            ),
            ShortLinkError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
