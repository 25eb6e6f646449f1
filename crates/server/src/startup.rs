use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging, init_logging_default, init_logging_json, LogFormat};
use configs::{AppConfig, LoggingConfig, ServerConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;
use service::Services;

/// Install the tracing subscriber described by `[logging]`.
pub fn init_logging_from(cfg: &LoggingConfig) {
    let format = cfg.format.parse::<LogFormat>().unwrap_or_else(|e| {
        eprintln!("{e}; falling back to compact logs");
        LogFormat::Compact
    });
    match (format, cfg.filter.as_deref()) {
        (LogFormat::Compact, None) => init_logging_default(),
        (LogFormat::Json, None) => init_logging_json(),
        (format, filter) => init_logging(format, filter),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, draining connections");
}

/// Connect, migrate, wire services and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database migrations applied");

    let services = Services::seaorm(db, &cfg.auth)?;
    let app: Router = routes::build_router(ServerState::from(services), build_cors(), cfg.server.request_timeout());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting courier server");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
