use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

use og_api::app::{configure, not_found, AppState};
use og_api::telemetry::init_tracing;
use og_core::{SessionReaper, VerificationStore, VerificationStoreConfig};
use og_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, base file first so it can pick the environment
    dotenvy::dotenv().ok();
    dotenvy::from_filename(Environment::from_env().env_file()).ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting OtpGate API server");

    let store_config = VerificationStoreConfig::try_from(&config.verification)
        .context("invalid verification policy")?;
    let store = Arc::new(VerificationStore::new(store_config));

    let reaper = SessionReaper::new(store.clone(), config.verification.reaper_interval()).start();

    let state = web::Data::new(AppState::new(store));
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .configure(configure)
            .default_service(web::route().to(not_found))
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await;

    reaper.shutdown().await;
    info!("OtpGate API server stopped");

    result.context("HTTP server exited with an error")
}
