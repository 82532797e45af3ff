//! Tines MCP Server
//!
//! Model Context Protocol server exposing Tines story, action, connection and
//! note tools to LLM agents over the stdio transport.

use std::sync::Arc;

use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use tines_client::{TinesClient, TinesConfig};
use tines_mcp::server::TinesMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the MCP transport; all diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tines_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    if dotenvy::dotenv().is_ok() {
        tracing::info!("environment variables loaded from .env file");
    }

    // Missing configuration is fatal before the transport is opened
    let config = Arc::new(TinesConfig::from_env()?);
    tracing::info!(api_url = %config.api_url(), "tines-mcp starting (stdio transport)");

    let client = TinesClient::from_config(config)?;
    let server = TinesMcpServer::new(Arc::new(client));
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
