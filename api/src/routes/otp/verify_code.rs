use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::{UserId, VerifyCodeResult};

use crate::app::AppState;
use crate::dto::VerifyCodeRequest;
use crate::handlers::handle_validation_errors;

/// Handler for POST /api/v1/otp/verify-code
///
/// Checks a submitted code. Every store outcome is a 200; a failed
/// attempt is reported through `success` and `message`.
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": 42,
///     "code": "482913"
/// }
/// ```
///
/// # Response
///
/// ## 200 OK
/// ```json
/// {
///     "success": false,
///     "message": "Invalid verification code. 2 attempt(s) remaining.",
///     "remaining_attempts": 2
/// }
/// ```
pub async fn verify_code(
    state: web::Data<AppState>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        tracing::warn!(errors = ?errors, "Validation failed for verify_code request");
        return handle_validation_errors(&errors);
    }

    let outcome = state
        .store
        .verify(UserId::from(request.user_id), &request.code);

    HttpResponse::Ok().json(VerifyCodeResult::from(outcome))
}
