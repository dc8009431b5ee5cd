//! # flowboardd — flowboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Load fixtures into the in-memory repositories (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use flowboard_adapter_http_axum::state::AppState;
use flowboard_adapter_memory::Fixtures;
use flowboard_app::services::concurrency_limit_service::ConcurrencyLimitService;
use flowboard_app::services::resource_service::ResourceService;
use flowboard_app::services::trigger_description_service::TriggerDescriptionService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading flowboard.toml")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Repositories
    let fixtures = match &config.fixtures.path {
        Some(path) => Fixtures::load(path)
            .with_context(|| format!("loading fixtures from {}", path.display()))?,
        None => {
            tracing::warn!("no fixture file configured, serving empty resource lists");
            Fixtures::default()
        }
    };
    let (work_queues, work_pools, limits) = fixtures.into_repositories();

    let bind_addr = config.bind_addr();

    // Services
    let trigger_service = TriggerDescriptionService::new(work_queues.clone(), work_pools.clone())
        .with_labels(config.labels.into());
    let resource_service = ResourceService::new(work_queues, work_pools);
    let concurrency_limit_service = ConcurrencyLimitService::new(limits);

    // HTTP
    let state = AppState::new(trigger_service, resource_service, concurrency_limit_service);
    let app = flowboard_adapter_http_axum::router::build(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, "flowboardd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("flowboardd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
