//! One-time passcode route handlers
//!
//! This module contains the internal endpoints wrapping the verification store:
//! - Issuing codes and verifying them
//! - Querying verified and lockout status
//! - Removing a user's verified status

pub mod remove_verification;
pub mod send_code;
pub mod status;
pub mod verify_code;

use actix_web::web;

use og_core::errors::{DomainError, DomainResult};
use og_core::UserId;

pub use remove_verification::remove_verification;
pub use send_code::send_code;
pub use status::status;
pub use verify_code::verify_code;

/// Register the OTP routes under the enclosing scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/send-code", web::post().to(send_code))
        .route("/verify-code", web::post().to(verify_code))
        .route("/status/{user_id}", web::get().to(status))
        .route(
            "/verification/{user_id}",
            web::delete().to(remove_verification),
        );
}

// Path segments bypass the DTO validators
fn user_id_from_path(raw: i64) -> DomainResult<UserId> {
    if raw < 1 {
        return Err(DomainError::Validation {
            message: format!("user_id must be a positive integer, got {}", raw),
        });
    }
    Ok(UserId::from(raw))
}
