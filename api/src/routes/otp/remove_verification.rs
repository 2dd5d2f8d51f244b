use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::handle_domain_error;

use super::user_id_from_path;

/// Handler for DELETE /api/v1/otp/verification/{user_id}
///
/// Revokes the user's verified status. Idempotent; always answers 204.
pub async fn remove_verification(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> HttpResponse {
    match user_id_from_path(path.into_inner()) {
        Ok(user_id) => {
            state.store.remove_verification(user_id);
            HttpResponse::NoContent().finish()
        }
        Err(error) => handle_domain_error(&error),
    }
}
