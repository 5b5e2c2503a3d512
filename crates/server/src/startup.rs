use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::employee::{repo::seaorm::SeaOrmEmployeeRepository, EmployeeRepository};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Validate the config, connect storage, apply migrations, and serve until ctrl-c or SIGTERM.
pub async fn run_with_config(mut cfg: AppConfig) -> anyhow::Result<()> {
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let repo: Arc<dyn EmployeeRepository> = Arc::new(SeaOrmEmployeeRepository::new(db));
    let app: Router = routes::build_router(ServerState::new(repo), build_cors());

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port))
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "starting employee api");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server drained");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
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
                warn!(error = %e, "failed to install SIGTERM handler");
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
    info!(event = "shutdown_signal", "shutdown signal received");
}
