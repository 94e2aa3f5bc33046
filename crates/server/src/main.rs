//! Deskbot Server - HTTP API for the customer-support chat backend
//!
//! This binary serves the messaging and conversation endpoints backed by
//! the SQLite store and the FAQ matching core.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
