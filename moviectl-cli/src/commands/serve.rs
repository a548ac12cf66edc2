//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use moviectl_core::MoviectlConfig;
use moviectl_server::db::{create_pool_with_options, migrations};
use moviectl_server::{run_server, AppState, PgMovieStore, ServerConfig};

use super::resolve_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config: 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Skip creating the schema on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = MoviectlConfig::load()?;
    let database_url = resolve_database_url(args.database_url, &config)?;
    let bind_addr = args.bind.unwrap_or(config.server.bind);
    let max_connections = args.max_connections.unwrap_or(config.database.max_connections);

    tracing::info!("Starting moviectl server on {}", bind_addr);

    let pool = create_pool_with_options(&database_url, max_connections)
        .await
        .context("Failed to create database pool")?;

    if !args.no_migrate {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };

    run_server(AppState::new(PgMovieStore::new(pool)), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
