//! HTTP server facade for PawHaven with Axum, error handling, and OpenAPI support.

use anyhow::Context;
use axum::{routing::get, Router};

use pawhaven_kernel::{AppState, ModuleRegistry};

pub mod error;
pub mod extract;
pub mod response;
pub mod router;
pub mod validate;

use router::RouterBuilder;

/// Start the HTTP server and serve until Ctrl-C
pub async fn start_server(registry: &ModuleRegistry, state: AppState) -> anyhow::Result<()> {
    let server = state.settings.server.clone();
    tracing::info!("starting HTTP server on {}:{}", server.host, server.port);

    let app = build_router(registry, state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", server.host, server.port))
        .await
        .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}:{}",
        server.host,
        server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Build the main HTTP router with all module routes mounted
pub fn build_router(registry: &ModuleRegistry, state: AppState) -> Router {
    let timeout_ms = state.settings.server.request_timeout_ms;
    let mut router_builder = RouterBuilder::new().route("/healthz", get(health_check));

    for module in registry.modules() {
        tracing::info!(module = module.name(), "mounting module routes");
        router_builder = router_builder.mount_module(module.routes(state.clone()));
    }

    router_builder
        .with_openapi(registry)
        .with_timeout(timeout_ms)
        .with_cors()
        .with_tracing()
        .with_request_id()
        .build()
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
