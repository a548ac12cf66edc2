use anyhow::{Context, Result};
use clap::Parser;

use moviectl_core::MoviectlConfig;
use moviectl_server::db::{create_pool, migrations};

use super::resolve_database_url;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = MoviectlConfig::load()?;
    let database_url = resolve_database_url(args.database_url, &config)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("✅ Schema is up to date");
    Ok(())
}
