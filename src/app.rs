/*
 * Responsibility
 * - Tracing / panic hook setup
 * - Config loading -> listener bind -> Router assembly
 * - Middleware ordering (outermost first): http -> cors -> json_body -> routes
 * - axum::serve() until the process is terminated
 */
use std::panic;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,backend_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the process is launched.
        tracing::error!(?info, "panic");
        default_hook(info);
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    init_panic_hook();

    let config = Config::from_env().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let listener = bind(&config).await?;
    serve(listener).await
}

pub async fn bind(config: &Config) -> Result<TcpListener> {
    TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))
}

pub async fn serve(listener: TcpListener) -> Result<()> {
    let port = listener.local_addr()?.port();
    let app = build_router();

    tracing::info!("Server is running on port {}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router() -> Router {
    let router = api::routes();
    let router = middleware::json_body::apply(router);
    let router = middleware::cors::apply(router);
    middleware::http::apply(router)
}
