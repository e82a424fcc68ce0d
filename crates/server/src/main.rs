//! Stringprops Server - HTTP REST API for string property analysis
//!
//! This binary serves the string analysis, storage, and filtering endpoints.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env if present before reading configuration
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
