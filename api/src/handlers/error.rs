use std::collections::HashMap;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use validator::ValidationErrors;

use og_core::errors::{DomainError, VerificationError};

use crate::dto::ErrorResponse;

/// Map a store rejection to its HTTP response
pub fn handle_verification_error(error: &VerificationError) -> HttpResponse {
    match error {
        VerificationError::LockedOut { minutes_remaining } => {
            ErrorResponse::new(error.code(), error.to_string())
                .with_detail("minutes_remaining", serde_json::json!(minutes_remaining))
                .to_response(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}

pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            ErrorResponse::new("validation_error", message.clone())
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Verification(inner) => handle_verification_error(inner),
    }
}

/// Render `validator` failures as a 400 with per-field error codes
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    ErrorResponse::new("validation_error", "Invalid request data")
        .with_details(details)
        .to_response(StatusCode::BAD_REQUEST)
}

/// Malformed or mistyped JSON bodies share the validation error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = ErrorResponse::new("validation_error", err.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}
