use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::StatusResponse;
use crate::handlers::handle_domain_error;

use super::user_id_from_path;

/// Handler for GET /api/v1/otp/status/{user_id}
///
/// Reports verified and lockout status. Both lockout fields come from one
/// store read, and an elapsed lockout is cleared on the way.
pub async fn status(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    let user_id = match user_id_from_path(path.into_inner()) {
        Ok(user_id) => user_id,
        Err(error) => return handle_domain_error(&error),
    };

    let lockout = state.store.active_lockout_minutes(user_id);

    HttpResponse::Ok().json(StatusResponse {
        user_id: user_id.value(),
        verified: state.store.is_verified(user_id),
        locked_out: lockout.is_some(),
        lockout_minutes_remaining: lockout.unwrap_or(0),
    })
}
