//! HTTP server initialization and runtime setup.
//!
//! Opens storage, wires services into the router, and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::{AuthService, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite storage (schema created if missing)
/// - URL and auth services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Storage cannot be opened or prepared
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(
        SqliteUrlRepository::connect(&config.storage_path)
            .await
            .context("couldn't open repository")?,
    );
    tracing::info!("Storage opened at {}", config.storage_path);

    let url_service = Arc::new(UrlService::new(repository.clone()));
    let auth_service = Arc::new(AuthService::new(
        &config.http_server.user,
        &config.http_server.password,
    ));

    let state = AppState::new(url_service, auth_service, config.alias_length);

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.http_server.address)
        .await
        .with_context(|| format!("couldn't bind {}", config.http_server.address))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    repository.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
