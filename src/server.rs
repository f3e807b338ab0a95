//! MCP server initialization for stdio and streamable HTTP transports.
//!
//! Provides [`serve_stdio`] and [`serve_http`] entry points that wire the upstream
//! client, operation registry, and MCP tool handler into a running server.

use crate::config::AppConfig;
use crate::dispatch::{Dispatcher, Registry};
use crate::tools::MarketDataTools;
use crate::upstream;
use anyhow::{bail, Result};
use rmcp::ServiceExt;
use std::sync::Arc;

/// Build the dispatcher shared by every session. Fails if the credential is missing.
pub fn build_dispatcher(config: &AppConfig) -> Result<Arc<Dispatcher>> {
    let credential = config.require_credential()?;
    let client = upstream::create_client(&config.upstream, credential)?;
    tracing::info!(base_url = %config.upstream.base_url, "upstream client ready");

    let registry = Registry::builtin();
    tracing::info!(operations = registry.len(), "operations registered");

    let dispatcher =
        Dispatcher::new(registry, Arc::from(client)).with_timeout(config.upstream.timeout());
    Ok(Arc::new(dispatcher))
}

/// Start the server with the transport named in config.
pub async fn serve(config: AppConfig) -> Result<()> {
    match config.server.transport.as_str() {
        "stdio" => serve_stdio(config).await,
        "http" => serve_http(config).await,
        other => bail!("unknown transport: {other}. Supported: stdio, http"),
    }
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: AppConfig) -> Result<()> {
    tracing::info!("starting CoinMarketCap MCP server on stdio");

    let dispatcher = build_dispatcher(&config)?;

    let tools = MarketDataTools::new(dispatcher);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running, waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over Streamable HTTP transport, mounted at `/mcp`.
pub async fn serve_http(config: AppConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(addr = %bind_addr, "starting CoinMarketCap MCP server on HTTP");

    let dispatcher = build_dispatcher(&config)?;

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(MarketDataTools::new(dispatcher.clone())),
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default()
            .into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "MCP server listening at http://{bind_addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down HTTP server");
        })
        .await?;

    Ok(())
}
