// File: services/salonify_backend/src/main.rs
use salonify_backend::app_state::AppState;
use salonify_backend::router::build_router;
use salonify_common::log_result;
use salonify_config::load_config;
use std::process;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    salonify_common::logging::init();

    let config = match log_result(
        load_config(),
        "Configuration loaded",
        "Failed to load config",
    ) {
        Ok(config) => Arc::new(config),
        Err(_) => process::exit(1),
    };

    let state = AppState::new(config.clone());
    #[cfg(feature = "gcal")]
    let _session_pruner = state.spawn_session_pruner();

    let app = build_router(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
