//! HTTP server initialization and runtime setup.
//!
//! Handles catalogue client setup, cache warm-up, and the Axum server lifecycle.

use crate::application::services::PidResolver;
use crate::config::Config;
use crate::infrastructure::catalog::HttpCatalogSource;
use crate::routes::app_router;
use crate::state::{AppState, Hosts};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - HTTP catalogue source
/// - Resolver with its private snapshot cache
/// - One warm-up refresh (failure is logged; the first request then fetches)
/// - Axum HTTP server with graceful shutdown
///
/// After shutdown is signalled, waits for in-flight background refreshes.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let source = HttpCatalogSource::new(&config.catalog_url)?;
    let resolver = Arc::new(PidResolver::new(
        Arc::new(source),
        config.freshness_window(),
    ));

    match resolver.scheduler().refresh().await {
        Ok(report) => tracing::info!(
            entries = report.entries,
            skipped = report.skipped,
            "Cache warmed"
        ),
        Err(e) => tracing::warn!("Cache warm-up failed: {}. Starting cold.", e),
    }

    let state = AppState::new(
        resolver.clone(),
        Hosts::new(&config.primary_host, &config.pid_host),
        config.surface,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Serving surface '{}' on http://{addr}", config.surface);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Waiting for background refreshes");
    resolver.scheduler().drain().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
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
