//! Application state and route table
//!
//! This module holds the shared state handed to every handler and the
//! function that registers all routes on an Actix-web application.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use og_core::VerificationStore;

use crate::dto::{ErrorResponse, HealthResponse};
use crate::handlers::json_error_handler;
use crate::routes;

/// Application state that holds the shared verification store
pub struct AppState {
    pub store: Arc<VerificationStore>,
}

impl AppState {
    pub fn new(store: Arc<VerificationStore>) -> Self {
        Self { store }
    }
}

/// Register every route and the JSON extractor configuration
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(web::scope("/otp").configure(routes::otp::configure)),
        );
}

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let stats = state.store.stats();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        active_sessions: stats.active_sessions,
        locked_out_users: stats.locked_out_users,
        verified_users: stats.verified_users,
    })
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
