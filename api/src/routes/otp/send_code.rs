use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::UserId;

use crate::app::AppState;
use crate::dto::{SendCodeRequest, SendCodeResponse};
use crate::handlers::{handle_validation_errors, handle_verification_error};

/// Handler for POST /api/v1/otp/send-code
///
/// Issues a fresh code for the user, replacing any outstanding one. The
/// plaintext code is returned so the calling process can deliver it.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": 42
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user_id": 42,
///     "code": "482913",
///     "expires_in": 300
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid request data
/// - 429 Too Many Requests: User is locked out, `details.minutes_remaining` is set
pub async fn send_code(
    state: web::Data<AppState>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        tracing::warn!(errors = ?errors, "Validation failed for send_code request");
        return handle_validation_errors(&errors);
    }

    let user_id = UserId::from(request.user_id);

    match state.store.create_session(user_id) {
        Ok(code) => HttpResponse::Ok().json(SendCodeResponse {
            user_id: user_id.value(),
            code,
            expires_in: state.store.config().code_expiration_minutes * 60,
        }),
        Err(error) => handle_verification_error(&error),
    }
}
