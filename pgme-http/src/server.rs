use crate::handlers;
use axum::{Router, routing::get};
use pgme_collector::GpuQuery;
use pgme_core::BuildInfo;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<dyn GpuQuery>,
    pub build: BuildInfo,
}

impl AppState {
    pub fn new(collector: Arc<dyn GpuQuery>, build: BuildInfo) -> Self {
        Self { collector, build }
    }
}

/// Build the Axum router with all exporter routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/healthz", get(handlers::health::healthz))
        .route("/metrics", get(handlers::metrics::scrape))
        .route("/metrics/", get(handlers::metrics::scrape))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(addr: &str, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Exporter listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Exporter stopped");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Got SIGINT, shutting down"),
        _ = terminate => info!("Got SIGTERM, shutting down"),
    }
}
