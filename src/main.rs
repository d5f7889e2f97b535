mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod rfq_actor;
mod product_actor;
mod admin_actor;

mod api;
mod auth;
mod config;
mod preview;
mod store;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::api::{build_router, AppState};
use crate::app_system::{setup_tracing, RfqSystem};
use crate::config::Config;
use crate::preview::{HttpFetcher, LinkPreviewer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::parse();
    info!(listen = %config.listen, "Starting rfq-desk");

    let system = RfqSystem::new(config.actor_buffer);
    system.seed_admin(&config.admin_username, &config.admin_password).await?;

    let fetcher = HttpFetcher::new(config.preview_timeout())?;
    let state = AppState {
        store: Arc::new(system.store()),
        previewer: LinkPreviewer::new(Arc::new(fetcher)),
    };

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Router and its store handles are gone; the actors can drain.
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
