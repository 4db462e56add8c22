mod config;
mod error;
mod extract;
mod openapi;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use listenlearn_common::catalog::Catalog;

use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting listenlearn-api");

    let config = Config::from_env()?;
    info!(
        listen_addr = %config.listen_addr,
        cors_origins = ?config.cors_origins,
        "configuration loaded"
    );

    let catalog = Arc::new(load_catalog()?);

    let app = server::create_app(catalog, config.cors_origins);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(local_addr = %listener.local_addr()?, "HTTP server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
        })?;

    info!("HTTP server shut down");
    Ok(())
}

fn load_catalog() -> Result<Catalog, AppError> {
    let catalog = Catalog::builtin()?;
    info!(lessons = catalog.len(), "lesson catalog loaded");
    Ok(catalog)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
