use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingListError::AmountOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_list.amount_out_of_range",
            ),
            ShoppingListError::Repository(_) => (
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
