use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use gradebook_config::ServerConfig;
use gradebook_db::run_migrations;

use gradebook::logging::init_tracing;
use gradebook::router::init_router;
use gradebook::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    init_tracing();

    let state = init_app_state().await;

    if state.jwt_config.uses_fallback_secret {
        warn!("JWT_SECRET is not set; using the built-in development secret");
    }

    if let Err(e) = run_migrations(&state.db).await {
        error!(error = %e, "Failed to run database migrations");
        std::process::exit(1);
    }

    let server_config = ServerConfig::from_env();
    let address = server_config.address();
    let app = init_router(state);

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(address = %address, "Server running");
    info!("Scalar UI available at http://{}/scalar", address);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
