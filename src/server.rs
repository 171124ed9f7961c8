//! MCP server initialization for stdio and streamable HTTP transports.
//!
//! Provides [`serve_stdio`] and [`serve_http`] entry points that wire up the
//! storage handle and MCP tool handler into a running server.

use crate::tools::CairnTools;
use anyhow::Result;
use cairn::config::CairnConfig;
use cairn::storage::Storage;
use rmcp::ServiceExt;
use std::sync::{Arc, Mutex};

/// Shared setup: open storage (fatal if the directory cannot be created).
/// Returns (storage, config) wrapped in Arc for sharing.
fn setup_shared_state(config: CairnConfig) -> Result<(Arc<Mutex<Storage>>, Arc<CairnConfig>)> {
    let storage = Storage::open(&config)?;
    tracing::info!(
        dir = %storage.dir().display(),
        database = %config.storage.database,
        "storage ready"
    );

    Ok((Arc::new(Mutex::new(storage)), Arc::new(config)))
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: CairnConfig) -> Result<()> {
    tracing::info!("starting Cairn MCP server on stdio");

    let (storage, config) = setup_shared_state(config)?;

    let tools = CairnTools::new(storage, config);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running, waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}

/// Start the MCP server over Streamable HTTP transport.
pub async fn serve_http(config: CairnConfig) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(addr = %bind_addr, "starting Cairn MCP server on HTTP");

    let (storage, config) = setup_shared_state(config)?;

    let service = rmcp::transport::streamable_http_server::StreamableHttpService::new(
        move || Ok(CairnTools::new(storage.clone(), config.clone())),
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
