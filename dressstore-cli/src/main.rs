//! dressstore - DressStore product service
//!
//! Serves the product catalogue over HTTP. Configuration comes from flags,
//! the environment, or a `.env` file in the working directory.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use dressstore_server::db::DEFAULT_MAX_CONNECTIONS;
use dressstore_server::{
    connect_postgres, run_server, AppState, MemoryProductStore, ServerConfig,
};
use tracing::{info, warn};

mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "dressstore",
    version,
    about = "HTTP CRUD service for the DressStore product catalogue"
)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
    database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,

    /// Keep products in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    in_memory: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; flags and the real environment still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    let state = if cli.in_memory {
        warn!("Using in-memory store; products are lost on shutdown");
        AppState::new(MemoryProductStore::new())
    } else {
        let url = cli
            .database_url
            .as_deref()
            .context("--database-url or DATABASE_URL is required")?;
        let store = connect_postgres(url, cli.max_connections)
            .await
            .context("failed to connect to database")?;
        AppState::new(store)
    };

    let config = ServerConfig {
        bind_addr: SocketAddr::new(cli.host, cli.port),
    };
    info!(addr = %config.bind_addr, "Starting dressstore");

    run_server(state, config).await.context("server error")?;
    Ok(())
}
